use std::time::Instant;

/// Dialogue-overlay interaction state for the current page.
///
/// The global switch survives navigation; everything else is per-page and
/// cleared whenever the book lands on a new sheet.
pub struct OverlayState {
    pub(in crate::app) globally_visible: bool,
    pub(in crate::app) locally_toggled: bool,
    pub(in crate::app) hovering: bool,
    pub(in crate::app) press_started_at: Option<Instant>,
    pub(in crate::app) long_press_fired: bool,
}

impl OverlayState {
    pub(in crate::app) fn new() -> Self {
        OverlayState {
            globally_visible: false,
            locally_toggled: false,
            hovering: false,
            press_started_at: None,
            long_press_fired: false,
        }
    }

    pub(in crate::app) fn reset_for_page_change(&mut self) {
        self.locally_toggled = false;
        self.hovering = false;
        self.press_started_at = None;
        self.long_press_fired = false;
    }
}
