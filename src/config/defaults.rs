pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_mobile_breakpoint() -> f32 {
    768.0
}

pub(crate) fn default_cap_width() -> f32 {
    1200.0
}

pub(crate) fn default_cap_height() -> f32 {
    900.0
}

pub(crate) fn default_fit_margin() -> f32 {
    0.85
}

pub(crate) fn default_flip_duration_ms() -> u64 {
    1000
}

pub(crate) fn default_long_press_ms() -> u64 {
    600
}

pub(crate) fn default_volume() -> f32 {
    1.0
}

pub(crate) fn default_page_turn_sound() -> String {
    "sounds/page-turn.ogg".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_bookmark() -> String {
    "b".to_string()
}

pub(crate) fn default_key_toggle_overlays() -> String {
    "d".to_string()
}

pub(crate) fn default_key_toggle_mute() -> String {
    "m".to_string()
}

pub(crate) fn default_key_toggle_fullscreen() -> String {
    "f".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
