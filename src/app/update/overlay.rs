use super::Effect;
use crate::app::state::App;
use crate::config::OverlayPolicy;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_page_hovered(&mut self, hovering: bool, effects: &mut Vec<Effect>) {
        self.overlay.hovering = hovering;
        if !hovering {
            // Leaving the page cancels any press in progress.
            self.overlay.press_started_at = None;
            self.overlay.long_press_fired = false;
        }
        effects.push(Effect::SyncAmbient);
    }

    pub(super) fn handle_page_pressed(&mut self, now: Instant) {
        self.overlay.press_started_at = Some(now);
        self.overlay.long_press_fired = false;
    }

    pub(super) fn handle_page_released(&mut self, now: Instant) {
        let Some(started) = self.overlay.press_started_at.take() else {
            return;
        };
        if self.overlay.long_press_fired {
            // The lock already applied on a tick; the release changes nothing.
            self.overlay.long_press_fired = false;
            return;
        }
        let held = now.duration_since(started);
        match self.config.overlay_policy {
            OverlayPolicy::Hover => {}
            OverlayPolicy::TapToggle => self.toggle_local_overlay(),
            OverlayPolicy::LongPress => {
                if held >= self.long_press_threshold() {
                    self.overlay.locally_toggled = true;
                }
            }
            OverlayPolicy::GlobalSwitch => {
                if held >= self.long_press_threshold() {
                    self.overlay.locally_toggled = true;
                } else {
                    self.toggle_local_overlay();
                }
            }
        }
    }

    /// Called from the tick so a held press locks the overlay at the
    /// threshold instead of waiting for the release.
    pub(super) fn poll_long_press(&mut self, now: Instant) {
        if !matches!(
            self.config.overlay_policy,
            OverlayPolicy::LongPress | OverlayPolicy::GlobalSwitch
        ) {
            return;
        }
        if self.overlay.long_press_fired {
            return;
        }
        let Some(started) = self.overlay.press_started_at else {
            return;
        };
        if now.duration_since(started) >= self.long_press_threshold() {
            self.overlay.long_press_fired = true;
            self.overlay.locally_toggled = true;
            debug!("Long press locked the dialogue overlay");
        }
    }

    pub(super) fn handle_toggle_dialogue_overlays(&mut self) {
        self.overlay.globally_visible = !self.overlay.globally_visible;
        info!(
            visible = self.overlay.globally_visible,
            "Dialogue overlay switch flipped"
        );
    }

    fn toggle_local_overlay(&mut self) {
        self.overlay.locally_toggled = !self.overlay.locally_toggled;
        debug!(
            toggled = self.overlay.locally_toggled,
            "Per-page dialogue toggle"
        );
    }
}
