/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the gallery and the derived views.
use std::path::{Path, PathBuf};

use crate::thumbnail::Thumbnail;

/// Represents a single image in the gallery
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Full path to the image file
    path: PathBuf,
    /// File name without extension (e.g., "DSC_0001" for "DSC_0001.jpg")
    display_name: String,
    /// Hidden entries keep their grid slot but leave the selector
    hidden: bool,
    /// Decoded once at creation, never refreshed
    thumbnail: Thumbnail,
}

impl ImageEntry {
    /// Create a visible entry for `path`
    pub fn new(path: PathBuf, thumbnail: Thumbnail) -> Self {
        let display_name = display_name_of(&path);
        Self {
            path,
            display_name,
            hidden: false,
            thumbnail,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Flip visibility and return the new hidden state
    pub(super) fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    /// Make the entry visible; returns whether anything changed
    pub(super) fn unhide(&mut self) -> bool {
        std::mem::replace(&mut self.hidden, false)
    }
}

/// Base name of `path` with only the last extension removed
pub fn display_name_of(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
