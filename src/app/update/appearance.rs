use super::Effect;
use crate::app::state::{App, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_zoom_in(&mut self) {
        self.set_zoom(self.ui.zoom + ZOOM_STEP);
    }

    pub(super) fn handle_zoom_out(&mut self) {
        self.set_zoom(self.ui.zoom - ZOOM_STEP);
    }

    pub(super) fn handle_zoom_changed(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        self.set_zoom(zoom);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.ui.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        debug!(zoom = self.ui.zoom, "Zoom changed");
    }

    pub(super) fn handle_volume_changed(&mut self, volume: f32) {
        if !volume.is_finite() {
            return;
        }
        self.ui.volume = volume.clamp(0.0, 1.0);
        if let Some(audio) = &mut self.audio {
            audio.set_volume(self.ui.volume);
        }
    }

    pub(super) fn handle_toggle_mute(&mut self) {
        self.ui.muted = !self.ui.muted;
        if let Some(audio) = &mut self.audio {
            audio.set_muted(self.ui.muted);
        }
        info!(muted = self.ui.muted, "Mute toggled");
    }

    pub(super) fn handle_toggle_fullscreen(&mut self, effects: &mut Vec<Effect>) {
        self.ui.fullscreen = !self.ui.fullscreen;
        info!(fullscreen = self.ui.fullscreen, "Fullscreen toggled");
        effects.push(Effect::SetFullscreen(self.ui.fullscreen));
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Theme toggled");
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.ui.menu_open = !self.ui.menu_open;
    }

    /// Opening the panel re-reads storage so an externally edited or cleared
    /// bookmark shows up without restarting.
    pub(super) fn handle_toggle_bookmark_panel(&mut self, effects: &mut Vec<Effect>) {
        self.ui.bookmark_panel_open = !self.ui.bookmark_panel_open;
        if self.ui.bookmark_panel_open {
            effects.push(Effect::ReadBookmark);
        }
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.ui.window_width = width.max(1.0);
        self.ui.window_height = height.max(1.0);
        // A resize can cross the breakpoint, which changes whether the
        // ambient loop is tied to hover.
        effects.push(Effect::SyncAmbient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::fixtures::sample_app;

    #[test]
    fn zoom_steps_stay_inside_the_limits() {
        let mut app = sample_app();
        for _ in 0..40 {
            app.handle_zoom_in();
        }
        assert_eq!(app.ui.zoom, MAX_ZOOM);
        for _ in 0..80 {
            app.handle_zoom_out();
        }
        assert_eq!(app.ui.zoom, MIN_ZOOM);
    }

    #[test]
    fn slider_zoom_is_clamped() {
        let mut app = sample_app();
        app.handle_zoom_changed(9.0);
        assert_eq!(app.ui.zoom, MAX_ZOOM);
        app.handle_zoom_changed(f32::NAN);
        assert_eq!(app.ui.zoom, MAX_ZOOM);
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut app = sample_app();
        app.handle_volume_changed(2.5);
        assert_eq!(app.ui.volume, 1.0);
        app.handle_volume_changed(-0.5);
        assert_eq!(app.ui.volume, 0.0);
    }

    #[test]
    fn fullscreen_toggle_requests_a_mode_change() {
        let mut app = sample_app();
        let mut effects = Vec::new();
        app.handle_toggle_fullscreen(&mut effects);
        assert!(app.ui.fullscreen);
        assert_eq!(effects, vec![Effect::SetFullscreen(true)]);
    }

    #[test]
    fn opening_the_bookmark_panel_rereads_storage() {
        let mut app = sample_app();
        let mut effects = Vec::new();
        app.handle_toggle_bookmark_panel(&mut effects);
        assert!(app.ui.bookmark_panel_open);
        assert_eq!(effects, vec![Effect::ReadBookmark]);
        effects.clear();
        app.handle_toggle_bookmark_panel(&mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn theme_flips_between_day_and_night() {
        let mut app = sample_app();
        let before = app.config.theme;
        app.handle_toggle_theme();
        assert_ne!(app.config.theme, before);
    }

    #[test]
    fn resize_crossing_the_breakpoint_changes_device_class() {
        let mut app = sample_app();
        let mut effects = Vec::new();
        assert!(!app.is_mobile_width());
        app.handle_window_resized(600.0, 900.0, &mut effects);
        assert!(app.is_mobile_width());
        assert_eq!(effects, vec![Effect::SyncAmbient]);
    }
}
