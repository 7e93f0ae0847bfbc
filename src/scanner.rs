//! Folder listing for the gallery.
//!
//! Only the immediate entries of a folder are considered, in whatever order
//! the file system enumerates them.

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::{GalleryError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported image files of a folder plus the count of files left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderListing {
    pub images: Vec<PathBuf>,
    pub skipped: usize,
}

/// Check whether a file name ends in one of the supported image extensions.
///
/// Matches on the lowercased name suffix, so a bare `.png` counts too.
pub fn is_supported(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
}

/// List the regular files directly inside `folder`.
///
/// Subfolders are not descended into. Failing to open `folder` itself is a
/// `DirectoryRead` error; an unreadable single entry is logged and skipped.
pub fn list_dir(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(GalleryError::DirectoryRead {
                    path: folder.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {}", folder.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            debug!("Ignoring non-file entry {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// List `folder` and keep the files with a supported extension
pub fn scan_folder(folder: &Path) -> Result<FolderListing> {
    let mut listing = FolderListing::default();

    for path in list_dir(folder)? {
        if is_supported(&path) {
            listing.images.push(path);
        } else {
            debug!("Unsupported file {}", path.display());
            listing.skipped += 1;
        }
    }

    Ok(listing)
}
