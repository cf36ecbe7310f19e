use crate::cache::Bookmark;
use crate::config::AppConfig;
use crate::media::PageMedia;
use std::collections::{HashMap, HashSet};

/// Window-level UI state: chrome toggles, zoom, audio levels, and the media
/// cache keyed by sheet index.
pub struct UiState {
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
    pub(in crate::app) zoom: f32,
    pub(in crate::app) volume: f32,
    pub(in crate::app) muted: bool,
    pub(in crate::app) fullscreen: bool,
    pub(in crate::app) menu_open: bool,
    pub(in crate::app) bookmark_panel_open: bool,
    pub(in crate::app) stored_bookmark: Option<Bookmark>,
    pub(in crate::app) media: HashMap<usize, PageMedia>,
    pub(in crate::app) requested_media: HashSet<usize>,
}

impl UiState {
    pub(in crate::app) fn new(config: &AppConfig, bookmark: Option<Bookmark>) -> Self {
        UiState {
            window_width: config.window_width,
            window_height: config.window_height,
            zoom: 1.0,
            volume: config.volume,
            muted: config.muted,
            fullscreen: false,
            menu_open: false,
            bookmark_panel_open: false,
            stored_bookmark: bookmark,
            media: HashMap::new(),
            requested_media: HashSet::new(),
        }
    }
}
