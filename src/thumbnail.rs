/// Thumbnail generation
///
/// Images are decoded once when they enter the gallery and scaled down to fit
/// the thumbnail bound. The result is kept in memory as an RGBA handle that
/// iced can draw directly.
use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, ImageReader, ImageResult, RgbaImage};
use std::path::Path;

use crate::error::{GalleryError, Result};

/// A decoded, size-bounded bitmap
#[derive(Debug, Clone)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    handle: Handle,
}

impl Thumbnail {
    /// Wrap already-scaled RGBA pixels
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels.into_raw()),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Handle for the `image` widget. Cloning shares the pixel data.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Anything able to turn an image file into a bounded thumbnail
pub trait Thumbnailer {
    fn load_and_thumbnail(&self, path: &Path, max_width: u32, max_height: u32) -> Result<Thumbnail>;
}

/// Thumbnailer backed by the `image` crate decoders
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageThumbnailer;

impl Thumbnailer for ImageThumbnailer {
    fn load_and_thumbnail(&self, path: &Path, max_width: u32, max_height: u32) -> Result<Thumbnail> {
        let img = decode(path).map_err(|source| GalleryError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let original = (img.width(), img.height());
        let thumbnail = fit_within(img, max_width, max_height);

        log::debug!(
            "Thumbnail for {}: {}x{} -> {}x{}",
            path.display(),
            original.0,
            original.1,
            thumbnail.width(),
            thumbnail.height()
        );

        Ok(Thumbnail::from_rgba(thumbnail.to_rgba8()))
    }
}

/// Decode by content, falling back to the extension when the header is unknown
fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Scale `img` down so it fits `max_width` x `max_height`, keeping its aspect
/// ratio. Images already inside the bound are returned untouched.
pub fn fit_within(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        return img;
    }
    img.resize(max_width, max_height, FilterType::Lanczos3)
}
