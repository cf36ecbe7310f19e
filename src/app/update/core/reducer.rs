use crate::app::messages::Message;
use crate::app::state::App;
use crate::app::update::Effect;
use std::time::Instant;

impl App {
    /// Pure-ish state transition: mutates `self`, returns the side effects
    /// to run. Everything timed goes through `Tick` so handlers stay
    /// testable with fabricated instants.
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        match message {
            Message::NextPage => self.handle_next_page(),
            Message::PreviousPage => self.handle_previous_page(),
            Message::JumpToPage(index) => self.handle_jump_to(index),
            Message::JumpToStart => self.handle_jump_to(0),
            Message::JumpToEnd => self.handle_jump_to_end(),
            Message::PageHovered(hovering) => self.handle_page_hovered(hovering, &mut effects),
            Message::PagePressed => self.handle_page_pressed(Instant::now()),
            Message::PageReleased => self.handle_page_released(Instant::now()),
            Message::ToggleDialogueOverlays => self.handle_toggle_dialogue_overlays(),
            Message::ToggleMute => self.handle_toggle_mute(),
            Message::ToggleFullscreen => self.handle_toggle_fullscreen(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::ToggleBookmarkPanel => self.handle_toggle_bookmark_panel(&mut effects),
            Message::BookmarkCurrentPage => effects.push(Effect::SaveBookmark),
            Message::JumpToBookmark => self.handle_jump_to_bookmark(),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),
            Message::ZoomChanged(zoom) => self.handle_zoom_changed(zoom),
            Message::VolumeChanged(volume) => self.handle_volume_changed(volume),
            Message::PageMediaLoaded { page, media } => {
                self.handle_page_media_loaded(page, media)
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::KeyPressed { key, modifiers } => {
                self.handle_key_pressed(key, modifiers, &mut effects)
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }
        effects
    }
}
