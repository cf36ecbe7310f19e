//! Dialogue-overlay visibility policy and clip-overlay placement.
//!
//! Visibility is a single pure function instead of booleans scattered across
//! the widget tree: the global switch wins, then the per-page toggle (tap or
//! long-press lock), then hover preview on pointer devices.

use crate::catalog::{ClipOverlay, REFERENCE_CANVAS_HEIGHT, REFERENCE_CANVAS_WIDTH};

pub fn should_show_overlay(
    globally_visible: bool,
    locally_toggled: bool,
    hovering: bool,
    is_mobile: bool,
) -> bool {
    globally_visible || locally_toggled || (hovering && !is_mobile)
}

/// A clip rectangle converted from reference-canvas pixels to fractions of
/// the page, so it scales with whatever size the page actually renders at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlacement {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl ClipPlacement {
    pub fn from_overlay(clip: &ClipOverlay) -> Self {
        ClipPlacement {
            left: clip.x / REFERENCE_CANVAS_WIDTH,
            top: clip.y / REFERENCE_CANVAS_HEIGHT,
            width: clip.width / REFERENCE_CANVAS_WIDTH,
            height: clip.height / REFERENCE_CANVAS_HEIGHT,
            scale: clip.scale.unwrap_or(1.0),
        }
    }

    /// Pixel rect for a page rendered at `page_width` x `page_height`.
    pub fn resolve(&self, page_width: f32, page_height: f32) -> (f32, f32, f32, f32) {
        (
            self.left * page_width,
            self.top * page_height,
            self.width * page_width * self.scale,
            self.height * page_height * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_switch_overrides_everything() {
        assert!(should_show_overlay(true, false, false, true));
        assert!(should_show_overlay(true, false, false, false));
    }

    #[test]
    fn local_toggle_shows_regardless_of_device() {
        assert!(should_show_overlay(false, true, false, true));
        assert!(should_show_overlay(false, true, false, false));
    }

    #[test]
    fn hover_preview_is_desktop_only() {
        assert!(should_show_overlay(false, false, true, false));
        assert!(!should_show_overlay(false, false, true, true));
    }

    #[test]
    fn hidden_when_nothing_requests_it() {
        assert!(!should_show_overlay(false, false, false, false));
    }

    #[test]
    fn placement_divides_by_the_reference_canvas() {
        let clip = ClipOverlay {
            src: "clip.webm".to_string(),
            x: 59.5,
            y: 421.0,
            width: 297.5,
            height: 210.5,
            scale: None,
        };
        let placement = ClipPlacement::from_overlay(&clip);
        assert!((placement.left - 0.1).abs() < 1e-6);
        assert!((placement.top - 0.5).abs() < 1e-6);
        assert!((placement.width - 0.5).abs() < 1e-6);
        assert!((placement.height - 0.25).abs() < 1e-6);
    }

    #[test]
    fn resolve_scales_with_the_rendered_page() {
        let clip = ClipOverlay {
            src: "clip.webm".to_string(),
            x: 59.5,
            y: 84.2,
            width: 119.0,
            height: 168.4,
            scale: Some(2.0),
        };
        let placement = ClipPlacement::from_overlay(&clip);
        let (left, top, width, height) = placement.resolve(500.0, 700.0);
        assert!((left - 50.0).abs() < 1e-3);
        assert!((top - 70.0).abs() < 1e-3);
        assert!((width - 200.0).abs() < 1e-3);
        assert!((height - 280.0).abs() < 1e-3);
    }
}
