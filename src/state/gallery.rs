use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use super::data::ImageEntry;
use crate::config::THUMBNAIL_SIZE;
use crate::error::{GalleryError, Result};
use crate::scanner;
use crate::thumbnail::Thumbnailer;

/// Summary of one folder import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Folder the batch came from (`None` for a plain list of files)
    pub folder: Option<PathBuf>,
    /// Entries appended to the gallery
    pub added: usize,
    /// Files left out because of their extension
    pub skipped: usize,
    /// Supported files that could not be decoded
    pub failures: Vec<GalleryError>,
}

/// The Gallery owns every image entry of the session, in insertion order.
/// Entries are never removed; only their hidden flag changes.
#[derive(Debug, Default)]
pub struct Gallery {
    entries: Vec<ImageEntry>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import the supported images found directly inside `folder`.
    ///
    /// An unreadable folder aborts the import with nothing added. Files that
    /// fail to decode are skipped and listed in the report.
    pub fn add_folder(&mut self, folder: &Path, thumbnailer: &dyn Thumbnailer) -> Result<ImportReport> {
        info!("Scanning folder: {}", folder.display());

        let listing = scanner::scan_folder(folder)?;
        let mut report = self.add_files(listing.images, thumbnailer);
        report.folder = Some(folder.to_path_buf());
        report.skipped = listing.skipped;

        info!(
            "Import complete: {} new, {} unsupported, {} failed ({} in gallery)",
            report.added,
            report.skipped,
            report.failures.len(),
            self.len()
        );

        Ok(report)
    }

    /// Append one entry per path, in the given order, decoding each thumbnail
    /// as it goes.
    pub fn add_files<I>(&mut self, paths: I, thumbnailer: &dyn Thumbnailer) -> ImportReport
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut report = ImportReport::default();

        for path in paths {
            match thumbnailer.load_and_thumbnail(&path, THUMBNAIL_SIZE, THUMBNAIL_SIZE) {
                Ok(thumbnail) => {
                    let (width, height) = thumbnail.dimensions();
                    debug!("Added {} ({}x{})", path.display(), width, height);
                    self.entries.push(ImageEntry::new(path, thumbnail));
                    report.added += 1;
                }
                Err(err) => {
                    warn!("Skipping image: {}", err);
                    report.failures.push(err);
                }
            }
        }

        report
    }

    /// Flip the hidden flag of the entry at `index`; returns the new state
    pub fn toggle_visibility(&mut self, index: usize) -> Result<bool> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(GalleryError::UnknownEntry(index))?;
        Ok(entry.toggle())
    }

    /// Make every hidden entry visible again; returns how many changed
    pub fn unhide_all(&mut self) -> usize {
        self.entries
            .iter_mut()
            .map(ImageEntry::unhide)
            .filter(|changed| *changed)
            .count()
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_hidden()).count()
    }
}
