use crate::app::messages::Message;
use crate::app::state::App;
use crate::app::update::Effect;
use crate::cache::{self, Bookmark};
use iced::{event, keyboard, window, Event, Task};
use std::path::Path;
use tracing::{debug, info};

impl App {
    /// Turn a reducer-requested effect into a runtime task. Everything
    /// blocking or platform-facing lives here.
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveBookmark => {
                let page = self.pager.current_page;
                cache::save_bookmark(&self.book_path, page);
                self.ui.stored_bookmark = Some(Bookmark { page });
                info!(page = page + 1, "Bookmarked the current page");
                Task::none()
            }
            Effect::ReadBookmark => {
                self.ui.stored_bookmark = cache::load_bookmark(&self.book_path);
                debug!(bookmark = ?self.ui.stored_bookmark, "Re-read bookmark storage");
                Task::none()
            }
            Effect::PlayPageTurn => {
                if let Some(audio) = &self.audio {
                    audio.play_one_shot(Path::new(&self.config.page_turn_sound));
                }
                Task::none()
            }
            Effect::SyncAmbient => {
                let desired = self.ambient_source();
                if let Some(audio) = &mut self.audio {
                    match desired {
                        Some(path) => audio.start_ambient(&path),
                        None => audio.stop_ambient(),
                    }
                }
                Task::none()
            }
            Effect::LoadPageMedia { page } => self.media_load_task(page),
            Effect::SetFullscreen(fullscreen) => {
                let mode = if fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                window::get_latest().and_then(move |id| window::change_mode(id, mode))
            }
            Effect::QuitSafely => {
                if let Some(audio) = &mut self.audio {
                    audio.stop_ambient();
                }
                info!("Exiting");
                iced::exit()
            }
        }
    }
}

/// Map raw runtime events to messages. Key presses already consumed by a
/// focused widget are left alone.
pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match (event, status) {
        (Event::Window(window::Event::Resized(size)), _) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        (
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed { key, modifiers }),
        _ => None,
    }
}
