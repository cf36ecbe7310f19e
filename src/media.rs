//! Page artwork loading with graceful fallback.
//!
//! Decoding happens off the update loop; a broken or missing file becomes a
//! placeholder labelled with the page number instead of an error. Video
//! sources are not decoded here, only represented, since playback is a
//! presentation concern the viewer renders as a poster panel.

use iced::widget::image::Handle;
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{debug, warn};

/// Flat lavender card drawn under the page-number label when artwork is
/// missing. Generated once and shared between every placeholder sheet.
pub static PLACEHOLDER_ART: Lazy<Handle> = Lazy::new(|| {
    let (width, height) = (450u32, 636u32);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[0xe9, 0xd5, 0xff, 0xff]);
    }
    Handle::from_rgba(width, height, pixels)
});

/// The renderable state of one sheet's artwork.
#[derive(Debug, Clone)]
pub enum PageMedia {
    Ready(Handle),
    /// Poster stand-in for a video-typed page.
    Video,
    /// Placeholder labelled with the page number at render time.
    Missing { page: usize },
}

impl PageMedia {
    pub fn is_missing(&self) -> bool {
        matches!(self, PageMedia::Missing { .. })
    }
}

/// Decode the artwork for `page`; never fails, never panics.
pub fn load_page_image(path: &Path, page: usize) -> PageMedia {
    match image::open(path) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (width, height) = rgba.dimensions();
            debug!(page, width, height, path = %path.display(), "Decoded page artwork");
            PageMedia::Ready(Handle::from_rgba(width, height, rgba.into_raw()))
        }
        Err(err) => {
            warn!(page, path = %path.display(), "Falling back to placeholder: {err}");
            PageMedia::Missing { page }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn broken_path_becomes_a_labelled_placeholder() {
        let media = load_page_image(&PathBuf::from("/definitely/not/here.png"), 7);
        match media {
            PageMedia::Missing { page } => assert_eq!(page, 7),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_file_becomes_a_placeholder() {
        let path = std::env::temp_dir().join(format!(
            "flipbook-media-test-{}.png",
            std::process::id()
        ));
        std::fs::write(&path, b"not an image").expect("write scratch file");
        let media = load_page_image(&path, 3);
        let _ = std::fs::remove_file(&path);
        assert!(media.is_missing());
    }
}
