//! The iced application shell: state, messages, reducer, and view.

mod messages;
mod state;
mod update;
mod view;

pub use messages::Message;
pub use state::App;

use crate::cache::Bookmark;
use crate::catalog::Catalog;
use crate::config::{AppConfig, ThemeMode};
use iced::{window, Size, Theme};
use std::path::PathBuf;

pub fn run_app(
    catalog: Catalog,
    config: AppConfig,
    book_path: PathBuf,
    bookmark: Option<Bookmark>,
) -> iced::Result {
    let window = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };
    iced::application("Flipbook Viewer", App::update, App::view)
        .subscription(App::subscription)
        .theme(|app: &App| match app.config.theme {
            ThemeMode::Day => Theme::Light,
            ThemeMode::Night => Theme::Dark,
        })
        .window(window)
        .run_with(move || App::bootstrap(catalog, config, book_path, bookmark))
}
