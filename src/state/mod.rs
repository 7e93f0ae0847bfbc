/// State management module
///
/// This module handles all application state, including:
/// - The ordered set of image entries and their visibility (gallery.rs)
/// - Shared data structures (data.rs)
/// - Grid and selector views rebuilt after every change (views.rs)

pub mod data;
pub mod gallery;
pub mod views;

pub use gallery::{Gallery, ImportReport};
pub use views::{GalleryViews, SelectorItem};
