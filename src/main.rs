mod app;
mod audio;
mod cache;
mod catalog;
mod config;
mod flip;
mod layout;
mod media;
mod overlay;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, reload, EnvFilter};

const CONFIG_PATH: &str = "conf/config.toml";
const DEFAULT_BOOK_PATH: &str = "book/book.toml";

fn main() -> Result<()> {
    let reload_handle = init_tracing();
    let config = config::load_config(Path::new(CONFIG_PATH));
    set_log_level(&reload_handle, config.log_level.as_filter_str());

    let book_path = parse_args();
    info!(book = %book_path.display(), "Starting flipbook viewer");
    let catalog = catalog::Catalog::load(&book_path)?;
    let bookmark = cache::load_bookmark(&book_path);
    if let Some(bookmark) = bookmark {
        info!(page = bookmark.page + 1, "Found a saved bookmark");
    }

    app::run_app(catalog, config, book_path, bookmark).context("Running the viewer")
}

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

/// Start logging at `info` so config loading is visible, then tighten or
/// loosen once the configured level is known.
fn init_tracing() -> ReloadHandle {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    // An explicit RUST_LOG wins over the config file.
    if std::env::var("RUST_LOG").is_ok() {
        return;
    }
    if let Err(err) = handle.reload(EnvFilter::new(level)) {
        tracing::warn!("Could not apply configured log level: {err}");
    }
}

fn parse_args() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_PATH))
}
