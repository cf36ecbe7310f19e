use std::time::Duration;

pub(crate) const MIN_ZOOM: f32 = 0.5;
pub(crate) const MAX_ZOOM: f32 = 3.0;
pub(crate) const ZOOM_STEP: f32 = 0.1;

/// Animation/long-press polling cadence while something is in flight.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Decoded artwork is kept for sheets within this distance of the current
/// one; anything further is evicted to bound memory on long books.
pub(crate) const MEDIA_KEEP_RADIUS: usize = 3;

/// Vertical room reserved below the book for the control bar and panels.
pub(crate) const CHROME_RESERVED_HEIGHT: f32 = 150.0;
