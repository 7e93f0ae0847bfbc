//! Error types shared by the gallery, scanner and thumbnailer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The folder dialog was cancelled.
    #[error("no folder selected")]
    NoFolderSelected,

    /// The chosen folder could not be listed. Aborts the import.
    #[error("cannot read folder {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file with a supported extension is not a decodable image.
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no image at index {0}")]
    UnknownEntry(usize),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
