use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,
    #[serde(default = "crate::config::defaults::default_cap_width")]
    pub cap_width: f32,
    #[serde(default = "crate::config::defaults::default_cap_height")]
    pub cap_height: f32,
    #[serde(default = "crate::config::defaults::default_fit_margin")]
    pub fit_margin: f32,
    #[serde(default = "crate::config::defaults::default_flip_duration_ms")]
    pub flip_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_long_press_ms")]
    pub long_press_ms: u64,
    #[serde(default)]
    pub overlay_policy: OverlayPolicy,
    #[serde(default = "crate::config::defaults::default_volume")]
    pub volume: f32,
    #[serde(default)]
    pub muted: bool,
    #[serde(default = "crate::config::defaults::default_page_turn_sound")]
    pub page_turn_sound: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_page")]
    pub key_next_page: String,
    #[serde(default = "crate::config::defaults::default_key_prev_page")]
    pub key_prev_page: String,
    #[serde(default = "crate::config::defaults::default_key_bookmark")]
    pub key_bookmark: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_overlays")]
    pub key_toggle_overlays: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_mute")]
    pub key_toggle_mute: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_fullscreen")]
    pub key_toggle_fullscreen: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            mobile_breakpoint: crate::config::defaults::default_mobile_breakpoint(),
            cap_width: crate::config::defaults::default_cap_width(),
            cap_height: crate::config::defaults::default_cap_height(),
            fit_margin: crate::config::defaults::default_fit_margin(),
            flip_duration_ms: crate::config::defaults::default_flip_duration_ms(),
            long_press_ms: crate::config::defaults::default_long_press_ms(),
            overlay_policy: OverlayPolicy::default(),
            volume: crate::config::defaults::default_volume(),
            muted: false,
            page_turn_sound: crate::config::defaults::default_page_turn_sound(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
            key_bookmark: crate::config::defaults::default_key_bookmark(),
            key_toggle_overlays: crate::config::defaults::default_key_toggle_overlays(),
            key_toggle_mute: crate::config::defaults::default_key_toggle_mute(),
            key_toggle_fullscreen: crate::config::defaults::default_key_toggle_fullscreen(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// How dialogue overlays respond to input. The default is the global switch
/// with hover preview; the per-page models remain selectable.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPolicy {
    Hover,
    TapToggle,
    LongPress,
    GlobalSwitch,
}

impl Default for OverlayPolicy {
    fn default() -> Self {
        OverlayPolicy::GlobalSwitch
    }
}

impl std::fmt::Display for OverlayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OverlayPolicy::Hover => "Hover",
            OverlayPolicy::TapToggle => "Tap toggle",
            OverlayPolicy::LongPress => "Long press",
            OverlayPolicy::GlobalSwitch => "Global switch",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
