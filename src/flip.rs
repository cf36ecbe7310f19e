//! Contract with the animated flip surface.
//!
//! The surface's flip animation and drag physics are opaque to the rest of
//! the app. This layer only requests a target sheet and later receives a
//! completion payload; the payload is authoritative, since a drag gesture
//! can land several sheets away from the request or be cancelled entirely.

use std::time::{Duration, Instant};

/// What the navigation controller is allowed to ask of the surface.
pub trait FlipSurface {
    /// Request an animated flip to `index`; ignored while out of range or
    /// already showing the target.
    fn flip_to_index(&mut self, current: usize, index: usize, now: Instant) -> bool;
    fn flip_next(&mut self, current: usize, now: Instant) -> bool;
    fn flip_prev(&mut self, current: usize, now: Instant) -> bool;
    /// The completion payload, once the in-flight flip has finished.
    fn poll_completed(&mut self, now: Instant) -> Option<usize>;
    fn is_flipping(&self) -> bool;
}

struct PendingFlip {
    target: usize,
    started_at: Instant,
}

/// Built-in surface driver with a fixed flip duration.
pub struct FlipAnimator {
    total_pages: usize,
    flip_duration: Duration,
    pending: Option<PendingFlip>,
}

impl FlipAnimator {
    pub fn new(total_pages: usize, flip_duration: Duration) -> Self {
        FlipAnimator {
            total_pages,
            flip_duration,
            pending: None,
        }
    }

    /// Where a drag gesture may deposit the book regardless of any pending
    /// request; the next poll reports it as the completion payload.
    pub fn settle_at(&mut self, index: usize, now: Instant) {
        if index < self.total_pages {
            self.pending = Some(PendingFlip {
                target: index,
                started_at: now - self.flip_duration,
            });
        }
    }
}

impl FlipSurface for FlipAnimator {
    fn flip_to_index(&mut self, current: usize, index: usize, now: Instant) -> bool {
        if index >= self.total_pages || index == current || self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingFlip {
            target: index,
            started_at: now,
        });
        true
    }

    fn flip_next(&mut self, current: usize, now: Instant) -> bool {
        self.flip_to_index(current, current + 1, now)
    }

    fn flip_prev(&mut self, current: usize, now: Instant) -> bool {
        if current == 0 {
            return false;
        }
        self.flip_to_index(current, current - 1, now)
    }

    fn poll_completed(&mut self, now: Instant) -> Option<usize> {
        let done = self
            .pending
            .as_ref()
            .map(|flip| now.duration_since(flip.started_at) >= self.flip_duration)
            .unwrap_or(false);
        if done {
            self.pending.take().map(|flip| flip.target)
        } else {
            None
        }
    }

    fn is_flipping(&self) -> bool {
        self.pending.is_some()
    }
}

/// Spread pairing for the two-page desktop view: covers display alone and
/// interior sheets pair on odd boundaries, matching a cover-first book.
pub fn spread_sheets(current: usize, total: usize) -> (usize, Option<usize>) {
    if total == 0 {
        return (0, None);
    }
    let last = total - 1;
    if current == 0 || current >= last {
        return (current.min(last), None);
    }
    let left = if current % 2 == 1 { current } else { current - 1 };
    let right = left + 1;
    (left, (right <= last).then_some(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> FlipAnimator {
        FlipAnimator::new(10, Duration::from_millis(1000))
    }

    #[test]
    fn flip_completes_after_the_animation_duration() {
        let mut surface = animator();
        let t0 = Instant::now();
        assert!(surface.flip_to_index(0, 4, t0));
        assert!(surface.is_flipping());
        assert_eq!(surface.poll_completed(t0 + Duration::from_millis(500)), None);
        assert_eq!(
            surface.poll_completed(t0 + Duration::from_millis(1000)),
            Some(4)
        );
        assert!(!surface.is_flipping());
    }

    #[test]
    fn out_of_range_and_same_index_requests_are_ignored() {
        let mut surface = animator();
        let t0 = Instant::now();
        assert!(!surface.flip_to_index(3, 10, t0));
        assert!(!surface.flip_to_index(3, 3, t0));
        assert!(!surface.flip_prev(0, t0));
        assert!(!surface.is_flipping());
    }

    #[test]
    fn requests_are_ignored_while_a_flip_is_in_flight() {
        let mut surface = animator();
        let t0 = Instant::now();
        assert!(surface.flip_next(0, t0));
        assert!(!surface.flip_next(0, t0));
    }

    #[test]
    fn drag_settles_at_an_unrequested_index() {
        let mut surface = animator();
        let t0 = Instant::now();
        surface.flip_next(2, t0);
        surface.settle_at(5, t0 + Duration::from_millis(200));
        assert_eq!(
            surface.poll_completed(t0 + Duration::from_millis(200)),
            Some(5)
        );
    }

    #[test]
    fn covers_display_alone_and_interiors_pair_on_odd_boundaries() {
        assert_eq!(spread_sheets(0, 6), (0, None));
        assert_eq!(spread_sheets(1, 6), (1, Some(2)));
        assert_eq!(spread_sheets(2, 6), (1, Some(2)));
        assert_eq!(spread_sheets(3, 6), (3, Some(4)));
        assert_eq!(spread_sheets(5, 6), (5, None));
    }
}
