//! Viewport sizing for the flip surface.
//!
//! Convention (fixed on purpose, since the page-flip widget cannot resize
//! mid-animation): wide windows are sized against a 4:3 two-page *spread*
//! and the returned width is per page (half the spread); narrow windows are
//! sized against a single A4 page (595x842). The device class is decided by
//! comparing the window width against a configurable breakpoint.

use crate::config::AppConfig;

/// Spread width over height for the two-page desktop view.
pub const SPREAD_RATIO: f32 = 4.0 / 3.0;
/// Single A4 page width over height for the narrow-window view.
pub const SINGLE_PAGE_RATIO: f32 = 595.0 / 842.0;

/// Bounds applied when fitting the book into a window.
#[derive(Debug, Clone, Copy)]
pub struct SizingSpec {
    pub cap_width: f32,
    pub cap_height: f32,
    pub fit_margin: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl SizingSpec {
    pub fn from_config(config: &AppConfig) -> Self {
        SizingSpec {
            cap_width: config.cap_width,
            cap_height: config.cap_height,
            fit_margin: config.fit_margin,
            min_width: 200.0,
            max_width: 1000.0,
            min_height: 300.0,
            max_height: 1200.0,
        }
    }
}

impl Default for SizingSpec {
    fn default() -> Self {
        SizingSpec {
            cap_width: 1200.0,
            cap_height: 900.0,
            fit_margin: 0.85,
            min_width: 200.0,
            max_width: 1000.0,
            min_height: 300.0,
            max_height: 1200.0,
        }
    }
}

/// Per-page pixel size handed to the flip surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

pub fn is_mobile_width(window_width: f32, breakpoint: f32) -> bool {
    window_width < breakpoint
}

/// Fit the book into the container, preserving the target aspect ratio.
///
/// The ratio is width over height in both branches; the strict `>` picks
/// which axis binds. Desktop output is halved into a per-page width before
/// clamping.
pub fn compute_page_size(
    spec: &SizingSpec,
    container_width: f32,
    container_height: f32,
    is_mobile: bool,
) -> PageSize {
    let ratio = if is_mobile {
        SINGLE_PAGE_RATIO
    } else {
        SPREAD_RATIO
    };
    let avail_width = container_width.min(spec.cap_width).max(0.0);
    let avail_height = container_height.min(spec.cap_height).max(0.0);

    let (mut width, height) = if avail_height > 0.0 && avail_width / avail_height > ratio {
        let height = avail_height * spec.fit_margin;
        (height * ratio, height)
    } else {
        let width = avail_width * spec.fit_margin;
        (width, if ratio > 0.0 { width / ratio } else { 0.0 })
    };

    if !is_mobile {
        width /= 2.0;
    }

    PageSize {
        width: width.clamp(spec.min_width, spec.max_width).floor(),
        height: height.clamp(spec.min_height, spec.max_height).floor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_spread_in_1200_by_900_container() {
        let size = compute_page_size(&SizingSpec::default(), 1200.0, 900.0, false);
        // 1200/900 equals the 4:3 target exactly, so the width axis binds:
        // spread = 1200 * 0.85 = 1020, per page 510, height 765.
        assert_eq!(size.width, 510.0);
        assert_eq!(size.height, 765.0);
    }

    #[test]
    fn desktop_wide_container_binds_on_height() {
        let size = compute_page_size(&SizingSpec::default(), 1200.0, 600.0, false);
        // height = 600 * 0.85 = 510, spread = 680, per page 340.
        assert_eq!(size.height, 510.0);
        assert_eq!(size.width, 340.0);
    }

    #[test]
    fn mobile_uses_single_page_ratio() {
        let size = compute_page_size(&SizingSpec::default(), 400.0, 800.0, true);
        // width = 400 * 0.85 = 340, height = 340 / (595/842) = 481.x.
        assert_eq!(size.width, 340.0);
        assert_eq!(size.height, 481.0);
    }

    #[test]
    fn output_is_clamped_on_huge_windows() {
        let size = compute_page_size(&SizingSpec::default(), 10_000.0, 10_000.0, true);
        assert!(size.width <= 1000.0);
        assert!(size.height <= 1200.0);
    }

    #[test]
    fn output_is_clamped_on_tiny_windows() {
        let size = compute_page_size(&SizingSpec::default(), 50.0, 40.0, false);
        assert_eq!(size.width, 200.0);
        assert_eq!(size.height, 300.0);
    }

    #[test]
    fn breakpoint_decides_device_class() {
        assert!(is_mobile_width(767.9, 768.0));
        assert!(!is_mobile_width(768.0, 768.0));
    }
}
