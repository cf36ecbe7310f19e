//! Configuration loading for the comic viewer.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back
//! to sensible defaults so the UI can still launch. Nothing is written back:
//! the bookmark is the only persisted state.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel, OverlayPolicy, ThemeMode};
