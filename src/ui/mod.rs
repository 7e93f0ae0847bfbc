/// Widgets and styling for the main window

pub mod grid;
pub mod theme;
