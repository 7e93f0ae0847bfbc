use iced::theme::Palette;
use iced::{Color, Theme};

use crate::config::APP_TITLE;

/// Dark blue-grey palette with a teal accent
pub fn palette() -> Palette {
    Palette {
        background: Color::from_rgb8(0x1B, 0x1F, 0x29),
        text: Color::from_rgb8(0xE0, 0xE6, 0xED),
        primary: Color::from_rgb8(0x2C, 0x3E, 0x50),
        success: Color::from_rgb8(0x00, 0xAD, 0xB5),
        danger: Color::from_rgb8(0xE7, 0x4C, 0x3C),
    }
}

pub fn theme() -> Theme {
    Theme::custom(APP_TITLE.to_string(), palette())
}
