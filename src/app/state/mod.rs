mod constants;
mod overlay;
mod pager;
mod ui;

pub(crate) use constants::*;
pub(in crate::app) use overlay::OverlayState;
pub(in crate::app) use pager::PagerState;
pub(in crate::app) use ui::UiState;

use super::messages::Message;
use crate::audio::AudioPlayer;
use crate::cache::Bookmark;
use crate::catalog::Catalog;
use crate::config::{AppConfig, OverlayPolicy};
use crate::layout;
use crate::media::PageMedia;
use crate::overlay::should_show_overlay;
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub struct App {
    pub(in crate::app) catalog: Catalog,
    pub(in crate::app) config: AppConfig,
    pub(in crate::app) book_path: PathBuf,
    pub(in crate::app) pager: PagerState,
    pub(in crate::app) overlay: OverlayState,
    pub(in crate::app) ui: UiState,
    pub(in crate::app) audio: Option<AudioPlayer>,
}

impl App {
    pub(super) fn bootstrap(
        catalog: Catalog,
        mut config: AppConfig,
        book_path: PathBuf,
        bookmark: Option<Bookmark>,
    ) -> (Self, Task<Message>) {
        clamp_config(&mut config);
        let audio = AudioPlayer::new(config.volume, config.muted);
        let total_pages = catalog.total_pages();
        let mut app = App {
            pager: PagerState::new(total_pages, Duration::from_millis(config.flip_duration_ms)),
            overlay: OverlayState::new(),
            ui: UiState::new(&config, bookmark),
            audio,
            catalog,
            config,
            book_path,
        };
        info!(
            title = %app.catalog.title(),
            total_pages,
            bookmark = ?app.ui.stored_bookmark,
            "Viewer state initialized"
        );
        let pages = app.prefetch_window();
        let tasks: Vec<Task<Message>> = pages
            .into_iter()
            .map(|page| app.media_load_task(page))
            .collect();
        (app, Task::batch(tasks))
    }

    pub(in crate::app) fn is_mobile_width(&self) -> bool {
        layout::is_mobile_width(self.ui.window_width, self.config.mobile_breakpoint)
    }

    pub(in crate::app) fn long_press_threshold(&self) -> Duration {
        Duration::from_millis(self.config.long_press_ms)
    }

    /// Sheets worth having decoded right now: the visible spread plus one
    /// neighbour either side.
    pub(in crate::app) fn prefetch_window(&self) -> Vec<usize> {
        let current = self.pager.current_page;
        let last = self.pager.total_pages.saturating_sub(1);
        (current.saturating_sub(1)..=(current + 2).min(last)).collect()
    }

    /// Kick off an async decode for `page`, unless its media is already
    /// present or in flight. Video pages resolve immediately as posters.
    pub(in crate::app) fn media_load_task(&mut self, page: usize) -> Task<Message> {
        if self.ui.media.contains_key(&page) || !self.ui.requested_media.insert(page) {
            return Task::none();
        }
        let Some(entry) = self.catalog.entry(page) else {
            self.ui.requested_media.remove(&page);
            return Task::none();
        };
        if entry.is_video() {
            self.ui.requested_media.remove(&page);
            self.ui.media.insert(page, PageMedia::Video);
            return Task::none();
        }
        let path = self.catalog.resolve(&entry.image);
        Task::perform(
            async move { crate::media::load_page_image(&path, page) },
            move |media| Message::PageMediaLoaded { page, media },
        )
    }

    /// Whether the current page's dialogue overlay should render, per the
    /// configured interaction policy. Video pages never show one.
    pub(in crate::app) fn overlay_visible(&self) -> bool {
        let Some(entry) = self.catalog.entry(self.pager.current_page) else {
            return false;
        };
        if entry.is_video() || entry.dialogue_overlay.is_none() {
            return false;
        }
        let overlay = &self.overlay;
        match self.config.overlay_policy {
            OverlayPolicy::Hover => overlay.hovering && !self.is_mobile_width(),
            OverlayPolicy::TapToggle | OverlayPolicy::LongPress => overlay.locally_toggled,
            OverlayPolicy::GlobalSwitch => should_show_overlay(
                overlay.globally_visible,
                overlay.locally_toggled,
                overlay.hovering,
                self.is_mobile_width(),
            ),
        }
    }

    /// The ambient loop that should be playing right now, if any. Desktop
    /// ties the loop to hovering the page; narrow windows keep it running
    /// while the page is open.
    pub(in crate::app) fn ambient_source(&self) -> Option<PathBuf> {
        let entry = self.catalog.entry(self.pager.current_page)?;
        let audio = entry.ambient_audio.as_deref()?;
        let active = self.is_mobile_width() || self.overlay.hovering;
        active.then(|| self.catalog.resolve(audio))
    }
}

/// Force every tunable into a range the UI can survive.
fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.mobile_breakpoint = config.mobile_breakpoint.clamp(320.0, 4096.0);
    config.cap_width = config.cap_width.max(400.0);
    config.cap_height = config.cap_height.max(300.0);
    config.fit_margin = config.fit_margin.clamp(0.5, 0.98);
    config.flip_duration_ms = config.flip_duration_ms.clamp(100, 5000);
    config.long_press_ms = config.long_press_ms.clamp(200, 2000);
    config.volume = config.volume.clamp(0.0, 1.0);
    for binding in [
        &mut config.key_next_page,
        &mut config.key_prev_page,
        &mut config.key_bookmark,
        &mut config.key_toggle_overlays,
        &mut config.key_toggle_mute,
        &mut config.key_toggle_fullscreen,
        &mut config.key_safe_quit,
    ] {
        *binding = binding.trim().to_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_settings_are_clamped() {
        let mut config = AppConfig {
            fit_margin: 7.0,
            flip_duration_ms: 2,
            volume: -1.0,
            key_next_page: "  Right ".to_string(),
            ..AppConfig::default()
        };
        clamp_config(&mut config);
        assert_eq!(config.fit_margin, 0.98);
        assert_eq!(config.flip_duration_ms, 100);
        assert_eq!(config.volume, 0.0);
        assert_eq!(config.key_next_page, "right");
    }
}
