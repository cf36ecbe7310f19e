use super::Effect;
use crate::app::state::App;
use crate::flip::FlipSurface;
use crate::media::PageMedia;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_next_page(&mut self) {
        let current = self.pager.current_page;
        if self.pager.surface.flip_next(current, Instant::now()) {
            debug!(from = current, "Flip to the next page requested");
        }
    }

    pub(super) fn handle_previous_page(&mut self) {
        let current = self.pager.current_page;
        if self.pager.surface.flip_prev(current, Instant::now()) {
            debug!(from = current, "Flip to the previous page requested");
        }
    }

    pub(super) fn handle_jump_to(&mut self, index: usize) {
        if index >= self.pager.total_pages {
            debug!(index, "Ignoring a jump outside the book");
            return;
        }
        let current = self.pager.current_page;
        if self.pager.surface.flip_to_index(current, index, Instant::now()) {
            debug!(from = current, to = index, "Jump requested");
        }
    }

    pub(super) fn handle_jump_to_end(&mut self) {
        self.handle_jump_to(self.pager.total_pages.saturating_sub(1));
    }

    pub(super) fn handle_jump_to_bookmark(&mut self) {
        let Some(bookmark) = self.ui.stored_bookmark else {
            debug!("No bookmark to jump to");
            return;
        };
        let last = self.pager.total_pages.saturating_sub(1);
        self.handle_jump_to(bookmark.page.min(last));
    }

    /// Drive everything time-based: flip completion and the long-press lock.
    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(landed) = self.pager.surface.poll_completed(now) {
            self.finish_flip(landed, effects);
        }
        self.poll_long_press(now);
    }

    /// The surface reported where the book actually landed; only now does
    /// the current page move.
    fn finish_flip(&mut self, landed: usize, effects: &mut Vec<Effect>) {
        self.pager.apply_completed(landed);
        self.overlay.reset_for_page_change();
        info!(page = self.pager.current_page + 1, "Landed on page");
        effects.push(Effect::PlayPageTurn);
        effects.push(Effect::SyncAmbient);
        for page in self.prefetch_window() {
            effects.push(Effect::LoadPageMedia { page });
        }
    }

    pub(super) fn handle_page_media_loaded(&mut self, page: usize, media: PageMedia) {
        self.ui.requested_media.remove(&page);
        let current = self.pager.current_page;
        let keep = current.saturating_sub(crate::app::state::MEDIA_KEEP_RADIUS)
            ..=current + crate::app::state::MEDIA_KEEP_RADIUS;
        if keep.contains(&page) {
            self.ui.media.insert(page, media);
        } else {
            debug!(page, "Dropping media for a page no longer nearby");
        }
        self.ui.media.retain(|key, _| keep.contains(key));
    }
}
