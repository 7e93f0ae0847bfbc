//! Application constants.
//!
//! There are no config files or flags; everything tunable lives here.

/// Window title, also used as the name of the custom theme.
pub const APP_TITLE: &str = "Image Organizer";

/// Initial window size (width, height).
pub const WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

/// Title of the native folder picker.
pub const DIALOG_TITLE: &str = "Select Folder";

/// Supported image file extensions, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Thumbnails are bounded to this many pixels on each side.
pub const THUMBNAIL_SIZE: u32 = 150;

/// Number of columns in the thumbnail grid.
pub const GRID_COLUMNS: usize = 4;

/// First entry of the selector, meaning "nothing picked".
pub const SELECTOR_PLACEHOLDER: &str = "Select Image";
