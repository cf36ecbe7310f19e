//! Bookmark persistence: the one piece of cross-session state.
//!
//! A single TOML file per book lives under `.cache/`, keyed by a hash of the
//! manifest path to avoid filesystem issues. Read and write failures degrade
//! to "no bookmark"; the viewer never blocks on storage.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bookmark {
    pub page: usize,
}

pub fn load_bookmark(book_path: &Path) -> Option<Bookmark> {
    load_bookmark_in(Path::new(CACHE_DIR), book_path)
}

pub fn save_bookmark(book_path: &Path, page: usize) {
    save_bookmark_in(Path::new(CACHE_DIR), book_path, page);
}

pub fn load_bookmark_in(cache_root: &Path, book_path: &Path) -> Option<Bookmark> {
    let path = bookmark_path(cache_root, book_path);
    let data = fs::read_to_string(path).ok()?;
    toml::from_str(&data).ok()
}

pub fn save_bookmark_in(cache_root: &Path, book_path: &Path, page: usize) {
    let path = bookmark_path(cache_root, book_path);
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %path.display(), "Could not create bookmark dir: {err}");
            return;
        }
    }
    match toml::to_string(&Bookmark { page }) {
        Ok(contents) => {
            if let Err(err) = fs::write(&path, contents) {
                warn!(path = %path.display(), "Could not write bookmark: {err}");
            } else {
                debug!(page, path = %path.display(), "Bookmark saved");
            }
        }
        Err(err) => warn!("Could not serialize bookmark: {err}"),
    }
}

fn bookmark_path(cache_root: &Path, book_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(book_path.as_os_str().to_string_lossy().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    cache_root.join(hash).join("bookmark.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flipbook-cache-test-{tag}-{}", std::process::id()))
    }

    #[test]
    fn bookmark_round_trips() {
        let root = scratch_root("roundtrip");
        let book = PathBuf::from("/books/pagambit/book.toml");
        save_bookmark_in(&root, &book, 7);
        assert_eq!(load_bookmark_in(&root, &book), Some(Bookmark { page: 7 }));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn cleared_storage_reads_as_no_bookmark() {
        let root = scratch_root("cleared");
        let book = PathBuf::from("/books/pagambit/book.toml");
        save_bookmark_in(&root, &book, 3);
        fs::remove_dir_all(&root).expect("clear cache");
        assert_eq!(load_bookmark_in(&root, &book), None);
    }

    #[test]
    fn distinct_books_get_distinct_slots() {
        let root = scratch_root("distinct");
        save_bookmark_in(&root, Path::new("/a/book.toml"), 1);
        save_bookmark_in(&root, Path::new("/b/book.toml"), 9);
        assert_eq!(
            load_bookmark_in(&root, Path::new("/a/book.toml")),
            Some(Bookmark { page: 1 })
        );
        assert_eq!(
            load_bookmark_in(&root, Path::new("/b/book.toml")),
            Some(Bookmark { page: 9 })
        );
        let _ = fs::remove_dir_all(&root);
    }
}
