use crate::media::PageMedia;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and the runtime.
#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    JumpToPage(usize),
    JumpToStart,
    JumpToEnd,
    PageHovered(bool),
    PagePressed,
    PageReleased,
    ToggleDialogueOverlays,
    ToggleMute,
    ToggleFullscreen,
    ToggleTheme,
    ToggleMenu,
    ToggleBookmarkPanel,
    BookmarkCurrentPage,
    JumpToBookmark,
    ZoomIn,
    ZoomOut,
    ZoomChanged(f32),
    VolumeChanged(f32),
    PageMediaLoaded { page: usize, media: PageMedia },
    WindowResized { width: f32, height: f32 },
    KeyPressed { key: Key, modifiers: Modifiers },
    Tick(Instant),
}
