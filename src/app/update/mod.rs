mod appearance;
mod core;
mod navigation;
mod overlay;

/// Side effects requested by the reducer; `run_effect` turns them into
/// tasks. Keeping them as data makes the handlers testable without a
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::app) enum Effect {
    SaveBookmark,
    ReadBookmark,
    PlayPageTurn,
    SyncAmbient,
    LoadPageMedia { page: usize },
    SetFullscreen(bool),
    QuitSafely,
}

#[cfg(test)]
pub(super) mod fixtures {
    use crate::app::state::App;
    use crate::catalog::{BookManifest, Catalog};
    use crate::config::AppConfig;
    use std::path::PathBuf;

    /// Five interior pages (so seven sheets with the covers); page three is
    /// a video and page two carries a clip with ambient sound.
    pub(crate) fn sample_app() -> App {
        sample_app_with(AppConfig::default())
    }

    pub(crate) fn sample_app_with(config: AppConfig) -> App {
        let manifest: BookManifest = toml::from_str(
            r#"
            title = "Fixture Book"

            [[pages]]
            image = "Layout/page-1.png"
            dialogue_overlay = "Overlays/page-1.png"

            [[pages]]
            image = "Layout/page-2.png"
            dialogue_overlay = "Overlays/page-2.png"
            ambient_audio = "Sounds/rain.ogg"

            [pages.clip]
            src = "Clips/panel.webm"
            x = 59.5
            y = 210.5
            width = 297.5
            height = 421.0

            [[pages]]
            image = "Layout/page-3.mp4"
            dialogue_overlay = "Overlays/page-3.png"

            [[pages]]
            image = "Layout/page-4.png"

            [[pages]]
            image = "Layout/page-5.png"
            "#,
        )
        .expect("fixture manifest parses");
        let catalog = Catalog::from_manifest(manifest, PathBuf::from("book"));
        let (app, _task) = App::bootstrap(
            catalog,
            config,
            PathBuf::from("/tmp/fixture-book.toml"),
            None,
        );
        app
    }
}
