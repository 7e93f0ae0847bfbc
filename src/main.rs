use iced::widget::{button, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use log::{debug, error, info, warn};
use rfd::FileDialog;
use std::path::{Path, PathBuf};

mod config;
mod error;
mod scanner;
mod state;
mod thumbnail;
mod ui;

use error::GalleryError;
use state::{Gallery, GalleryViews, ImportReport, SelectorItem};
use thumbnail::ImageThumbnailer;

/// Main application state
struct ImageOrganizer {
    /// Every image added during this session
    gallery: Gallery,
    /// Grid and selector derived from the gallery
    views: GalleryViews,
    /// Current dropdown choice
    selected: SelectorItem,
    /// Status message to display to the user
    status: String,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Add Folder" button
    AddFolder,
    /// Hide or unhide the image at this gallery index
    ToggleVisibility(usize),
    /// User clicked the "Unhide All" button
    UnhideAll,
    /// User picked an entry in the selector
    ImageSelected(SelectorItem),
}

impl ImageOrganizer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("{} started", config::APP_TITLE);

        (Self::with_gallery(Gallery::new()), Task::none())
    }

    fn with_gallery(gallery: Gallery) -> Self {
        let views = GalleryViews::rebuild(&gallery);
        ImageOrganizer {
            gallery,
            views,
            selected: SelectorItem::placeholder(),
            status: String::from("Ready. Add a folder to get started."),
            theme: ui::theme::theme(),
        }
    }

    /// Handle application messages and update state.
    ///
    /// Every message that changes the gallery ends in a full view rebuild.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddFolder => match pick_folder() {
                Ok(folder) => self.import(&folder),
                Err(err) => {
                    debug!("Add folder cancelled: {}", err);
                    return Task::none();
                }
            },
            Message::ToggleVisibility(index) => match self.gallery.toggle_visibility(index) {
                Ok(hidden) => {
                    debug!("Image {} is now {}", index, if hidden { "hidden" } else { "visible" });
                    self.status = self.toggle_status(index, hidden);
                }
                Err(err) => {
                    warn!("Toggle failed: {}", err);
                    self.status = err.to_string();
                }
            },
            Message::UnhideAll => {
                let count = self.gallery.unhide_all();
                info!("Unhid {} images", count);
                self.status = format!(
                    "Unhid {} images. {} of {} hidden.",
                    count,
                    self.gallery.hidden_count(),
                    self.gallery.len()
                );
            }
            Message::ImageSelected(item) => {
                self.status = if item.is_placeholder() {
                    String::from("No image selected.")
                } else {
                    self.selection_status(&item)
                };
                self.selected = item;
                return Task::none();
            }
        }

        self.refresh_views();
        Task::none()
    }

    /// Import a folder and put the outcome in the status line
    fn import(&mut self, folder: &Path) {
        match self.gallery.add_folder(folder, &ImageThumbnailer) {
            Ok(report) => self.status = import_status(&report),
            Err(err) => {
                error!("Import failed: {}", err);
                self.status = format!("Import failed: {}", err);
            }
        }
    }

    fn toggle_status(&self, index: usize, hidden: bool) -> String {
        let name = self
            .gallery
            .entries()
            .get(index)
            .map_or("image", |entry| entry.display_name());
        format!(
            "{} {}. {} of {} hidden.",
            if hidden { "Hid" } else { "Showing" },
            name,
            self.gallery.hidden_count(),
            self.gallery.len()
        )
    }

    fn selection_status(&self, item: &SelectorItem) -> String {
        match item.entry.and_then(|index| self.gallery.entries().get(index)) {
            Some(entry) => format!("Selected {} ({}).", item, entry.path().display()),
            None => format!("Selected {}.", item),
        }
    }

    fn refresh_views(&mut self) {
        self.views = GalleryViews::rebuild(&self.gallery);
        self.selected = self.views.selector.reconcile(&self.selected);
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button("Add Folder")
                .on_press(Message::AddFolder)
                .padding([6, 12]),
            button("Unhide All")
                .on_press(Message::UnhideAll)
                .padding([6, 12]),
            Space::with_width(Length::Fixed(20.0)),
            text("Choosing:"),
            pick_list(
                self.views.selector.items(),
                Some(&self.selected),
                Message::ImageSelected,
            ),
            Space::with_width(Length::Fill),
            text(format!(
                "{} images, {} hidden",
                self.views.grid.cells().len(),
                self.gallery.hidden_count()
            )),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let body: Element<'_, Message> = if self.gallery.is_empty() {
            container(text("No images yet."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            scrollable(ui::grid::view(&self.gallery, &self.views.grid))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        column![controls, body, text(&self.status).size(14)]
            .spacing(10)
            .padding(10)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Show the native folder picker
fn pick_folder() -> error::Result<PathBuf> {
    FileDialog::new()
        .set_title(config::DIALOG_TITLE)
        .pick_folder()
        .ok_or(GalleryError::NoFolderSelected)
}

/// One-line summary of an import for the status bar
fn import_status(report: &ImportReport) -> String {
    let mut status = match &report.folder {
        Some(folder) => format!("Added {} images from {}", report.added, folder.display()),
        None => format!("Added {} images", report.added),
    };

    if report.skipped > 0 {
        status.push_str(&format!(", skipped {} unsupported files", report.skipped));
    }
    status.push('.');

    if let Some(first) = report.failures.first() {
        status.push_str(&format!(
            " {} could not be decoded ({}).",
            report.failures.len(),
            first
        ));
    }

    status
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(config::APP_TITLE, ImageOrganizer::update, ImageOrganizer::view)
        .theme(ImageOrganizer::theme)
        .window_size(config::WINDOW_SIZE)
        .centered()
        .run_with(ImageOrganizer::new)
}
