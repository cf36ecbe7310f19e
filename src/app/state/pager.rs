use crate::flip::FlipAnimator;
use std::time::Duration;

/// Which sheet the book is open to, and the surface animating between them.
///
/// `current_page` only ever changes from a completion payload delivered by
/// the surface; requesting a flip leaves it untouched until then.
pub struct PagerState {
    pub(in crate::app) current_page: usize,
    pub(in crate::app) total_pages: usize,
    pub(in crate::app) surface: FlipAnimator,
}

impl PagerState {
    pub(in crate::app) fn new(total_pages: usize, flip_duration: Duration) -> Self {
        PagerState {
            current_page: 0,
            total_pages,
            surface: FlipAnimator::new(total_pages, flip_duration),
        }
    }

    /// Accept the landing index the surface reported.
    pub(in crate::app) fn apply_completed(&mut self, landed: usize) {
        self.current_page = landed.min(self.total_pages.saturating_sub(1));
    }

    /// Reading progress in `0.0..=1.0` for the progress bar.
    pub(in crate::app) fn progress(&self) -> f32 {
        let span = self.total_pages.saturating_sub(1).max(1);
        self.current_page as f32 / span as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_payload_is_clamped_to_the_last_sheet() {
        let mut pager = PagerState::new(5, Duration::from_millis(1000));
        pager.apply_completed(9);
        assert_eq!(pager.current_page, 4);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let mut pager = PagerState::new(5, Duration::from_millis(1000));
        assert_eq!(pager.progress(), 0.0);
        pager.apply_completed(4);
        assert_eq!(pager.progress(), 1.0);
    }
}
