//! Page catalog for the comic.
//!
//! The catalog is data, not code: `book.toml` lists every interior page in
//! reading order. The viewer wraps the entries with a front and a back
//! cover, so the flip surface always shows `entries + 2` sheets. Nothing is
//! validated beyond the TOML shape; duplicate sources are allowed and
//! missing media is handled at render time.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed pixel canvas against which clip-overlay rectangles are authored.
pub const REFERENCE_CANVAS_WIDTH: f32 = 595.0;
pub const REFERENCE_CANVAS_HEIGHT: f32 = 842.0;

const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// A short looping clip positioned over a sub-rectangle of a page.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipOverlay {
    pub src: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub scale: Option<f32>,
}

/// One interior page of the book.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    pub image: String,
    #[serde(default)]
    pub dialogue_overlay: Option<String>,
    #[serde(default)]
    pub clip: Option<ClipOverlay>,
    #[serde(default)]
    pub ambient_audio: Option<String>,
}

impl PageEntry {
    /// Dialogue overlays are a comic affordance for static art only, so the
    /// kind matters to the overlay policy.
    pub fn is_video(&self) -> bool {
        Path::new(&self.image)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                VIDEO_EXTENSIONS.iter().any(|v| *v == ext)
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookManifest {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub byline: String,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

fn default_title() -> String {
    "Untitled".to_string()
}

/// What the flip surface shows at a given sheet index.
#[derive(Debug)]
pub enum Sheet<'a> {
    FrontCover,
    Entry(&'a PageEntry),
    BackCover,
}

pub struct Catalog {
    manifest: BookManifest,
    base_dir: PathBuf,
}

impl Catalog {
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let data = fs::read_to_string(manifest_path)
            .with_context(|| format!("Reading book manifest {}", manifest_path.display()))?;
        let manifest: BookManifest = toml::from_str(&data)
            .with_context(|| format!("Parsing book manifest {}", manifest_path.display()))?;
        let base_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        info!(
            title = %manifest.title,
            interior_pages = manifest.pages.len(),
            "Loaded book manifest"
        );
        Ok(Catalog::from_manifest(manifest, base_dir))
    }

    pub fn from_manifest(manifest: BookManifest, base_dir: PathBuf) -> Self {
        Catalog { manifest, base_dir }
    }

    pub fn title(&self) -> &str {
        &self.manifest.title
    }

    pub fn byline(&self) -> &str {
        &self.manifest.byline
    }

    /// Interior entries plus the two covers the viewer adds around them.
    pub fn total_pages(&self) -> usize {
        self.manifest.pages.len() + 2
    }

    pub fn sheet(&self, index: usize) -> Option<Sheet<'_>> {
        let total = self.total_pages();
        match index {
            0 => Some(Sheet::FrontCover),
            i if i + 1 == total => Some(Sheet::BackCover),
            i if i < total => Some(Sheet::Entry(&self.manifest.pages[i - 1])),
            _ => None,
        }
    }

    /// The interior entry at a sheet index; covers and out-of-range are None.
    pub fn entry(&self, index: usize) -> Option<&PageEntry> {
        match self.sheet(index) {
            Some(Sheet::Entry(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Resolve a manifest-relative asset path against the book directory.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let manifest: BookManifest = toml::from_str(
            r#"
            title = "Pagambit"
            byline = "Mel Creatives"

            [[pages]]
            image = "Layout/SCENE 1 - PAGE 1.png"
            dialogue_overlay = "Overlays/page-1.png"

            [[pages]]
            image = "Layout/SCENE 1 - PAGE 2.png"
            ambient_audio = "Sounds/rain.ogg"

            [pages.clip]
            src = "Clips/panel.webm"
            x = 59.5
            y = 210.5
            width = 297.5
            height = 421.0
            scale = 1.2

            [[pages]]
            image = "Layout/SCENE 2 - PAGE 3.mp4"
            "#,
        )
        .expect("manifest parses");
        Catalog::from_manifest(manifest, PathBuf::from("book"))
    }

    #[test]
    fn covers_wrap_the_interior_entries() {
        let catalog = sample_catalog();
        assert_eq!(catalog.total_pages(), 5);
        assert!(matches!(catalog.sheet(0), Some(Sheet::FrontCover)));
        assert!(matches!(catalog.sheet(4), Some(Sheet::BackCover)));
        assert!(matches!(catalog.sheet(1), Some(Sheet::Entry(_))));
    }

    #[test]
    fn out_of_range_sheet_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.sheet(5).is_none());
        assert!(catalog.entry(0).is_none());
        assert!(catalog.entry(4).is_none());
    }

    #[test]
    fn clip_and_audio_fields_round_trip() {
        let catalog = sample_catalog();
        let entry = catalog.entry(2).expect("second interior page");
        let clip = entry.clip.as_ref().expect("clip overlay");
        assert_eq!(clip.src, "Clips/panel.webm");
        assert_eq!(clip.scale, Some(1.2));
        assert_eq!(entry.ambient_audio.as_deref(), Some("Sounds/rain.ogg"));
    }

    #[test]
    fn video_pages_are_detected_by_extension() {
        let catalog = sample_catalog();
        assert!(!catalog.entry(1).expect("page 1").is_video());
        assert!(catalog.entry(3).expect("page 3").is_video());
    }

    #[test]
    fn asset_paths_resolve_against_the_book_dir() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.resolve("Sounds/rain.ogg"),
            PathBuf::from("book/Sounds/rain.ogg")
        );
    }
}
