/// Thumbnail grid
///
/// Renders the grid view row by row. Hidden cells keep their slot, their name
/// and their toggle button; only the thumbnail is left out.
use iced::widget::{button, column, container, image, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use crate::config::THUMBNAIL_SIZE;
use crate::state::views::{GridCell, GridView};
use crate::state::Gallery;
use crate::Message;

const SPACING: f32 = 10.0;

pub fn view<'a>(gallery: &'a Gallery, grid: &'a GridView) -> Element<'a, Message> {
    let rows = grid.rows().map(|cells| -> Element<'a, Message> {
        Row::with_children(cells.iter().map(|cell| cell_view(gallery, cell)))
            .spacing(SPACING)
            .into()
    });

    Column::with_children(rows)
        .spacing(SPACING)
        .padding(SPACING)
        .into()
}

fn cell_view<'a>(gallery: &'a Gallery, cell: &'a GridCell) -> Element<'a, Message> {
    let size = THUMBNAIL_SIZE as f32;

    let picture: Element<'a, Message> = match gallery.entries().get(cell.index) {
        Some(entry) if !cell.hidden => image(entry.thumbnail().handle().clone()).into(),
        _ => Space::new(Length::Fixed(size), Length::Fixed(size)).into(),
    };

    let toggle_label = if cell.hidden { "Unhide" } else { "Hide" };

    column![
        container(picture).center_x(size).center_y(size),
        text(&cell.name),
        button(toggle_label)
            .on_press(Message::ToggleVisibility(cell.index))
            .padding([6, 12]),
    ]
    .spacing(6)
    .width(Length::Fixed(size + SPACING))
    .align_x(Alignment::Center)
    .into()
}
