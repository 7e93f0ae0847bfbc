/// Views derived from the gallery
///
/// Both views are recomputed from scratch after every gallery mutation.
/// Nothing is cached or diffed between rebuilds.
use std::fmt;

use super::gallery::Gallery;
use crate::config::{GRID_COLUMNS, SELECTOR_PLACEHOLDER};

/// One slot of the thumbnail grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Index of the entry in the gallery
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub name: String,
    /// Hidden cells keep their slot and toggle button but draw no thumbnail
    pub hidden: bool,
}

/// Every entry placed on a fixed-width grid, in gallery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridView {
    cells: Vec<GridCell>,
}

impl GridView {
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells grouped by grid row
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunk_by(|a, b| a.row == b.row)
    }

    pub fn row_count(&self) -> usize {
        self.cells.last().map_or(0, |cell| cell.row + 1)
    }
}

/// An item of the selector dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItem {
    /// Gallery index, `None` for the placeholder
    pub entry: Option<usize>,
    pub label: String,
}

impl SelectorItem {
    pub fn placeholder() -> Self {
        Self {
            entry: None,
            label: SELECTOR_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.entry.is_none()
    }
}

impl fmt::Display for SelectorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The placeholder followed by every visible entry, in gallery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    items: Vec<SelectorItem>,
}

impl Default for SelectorView {
    fn default() -> Self {
        Self {
            items: vec![SelectorItem::placeholder()],
        }
    }
}

impl SelectorView {
    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    /// Keep `selected` if its entry is still offered, else fall back to the
    /// placeholder
    pub fn reconcile(&self, selected: &SelectorItem) -> SelectorItem {
        self.items
            .iter()
            .find(|item| item.entry == selected.entry)
            .cloned()
            .unwrap_or_else(SelectorItem::placeholder)
    }
}

/// Grid and selector, always rebuilt together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryViews {
    pub grid: GridView,
    pub selector: SelectorView,
}

impl GalleryViews {
    pub fn rebuild(gallery: &Gallery) -> Self {
        let entries = gallery.entries();

        let cells = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| GridCell {
                index,
                row: index / GRID_COLUMNS,
                col: index % GRID_COLUMNS,
                name: entry.display_name().to_string(),
                hidden: entry.is_hidden(),
            })
            .collect();

        let mut items = Vec::with_capacity(entries.len() + 1);
        items.push(SelectorItem::placeholder());
        items.extend(
            entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| !entry.is_hidden())
                .map(|(index, entry)| SelectorItem {
                    entry: Some(index),
                    label: entry.display_name().to_string(),
                }),
        );

        let views = Self {
            grid: GridView { cells },
            selector: SelectorView { items },
        };

        log::debug!(
            "Rebuilt views: {} grid rows, {} selectable",
            views.grid.row_count(),
            views.selector.items().len() - 1
        );

        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner;
    use crate::state::data::display_name_of;
    use crate::state::gallery::tests::gallery_of;
    use crate::thumbnail::ImageThumbnailer;

    fn expected_selector(gallery: &Gallery) -> Vec<String> {
        std::iter::once(SELECTOR_PLACEHOLDER.to_string())
            .chain(
                gallery
                    .entries()
                    .iter()
                    .filter(|e| !e.is_hidden())
                    .map(|e| e.display_name().to_string()),
            )
            .collect()
    }

    #[test]
    fn test_empty_gallery() {
        let views = GalleryViews::rebuild(&Gallery::new());
        assert!(views.grid.cells().is_empty());
        assert_eq!(views.grid.row_count(), 0);
        assert_eq!(views.selector.labels(), vec!["Select Image"]);
        assert_eq!(views, GalleryViews::default());
    }

    #[test]
    fn test_scenario_add_toggle_unhide_all() {
        // "c.txt" never reaches the gallery: the scanner filters it out
        let mut gallery = gallery_of(&["b.png", "a.jpg"]);
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), vec!["Select Image", "b", "a"]);

        gallery.toggle_visibility(0).unwrap();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), vec!["Select Image", "a"]);
        assert_eq!(views.grid.cells().len(), 2);
        assert!(views.grid.cells()[0].hidden);
        assert_eq!(views.grid.cells()[0].name, "b");

        gallery.toggle_visibility(1).unwrap();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), vec!["Select Image"]);

        gallery.unhide_all();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), vec!["Select Image", "b", "a"]);
    }

    #[test]
    fn test_scenario_from_folder_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(8, 8).save(dir.path().join("b.png")).unwrap();
        image::RgbImage::new(8, 8).save(dir.path().join("a.jpg")).unwrap();
        std::fs::write(dir.path().join("c.txt"), b"not an image").unwrap();

        let mut gallery = Gallery::new();
        let report = gallery.add_folder(dir.path(), &ImageThumbnailer).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 1);
        assert!(report.failures.is_empty());

        let listed: Vec<String> = scanner::list_dir(dir.path())
            .unwrap()
            .iter()
            .filter(|path| !path.ends_with("c.txt"))
            .map(|path| display_name_of(path))
            .collect();
        let mut expected = vec![SELECTOR_PLACEHOLDER.to_string()];
        expected.extend(listed.iter().cloned());

        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), expected);
        assert_eq!(views.grid.cells().len(), 2);

        let b = gallery
            .entries()
            .iter()
            .position(|e| e.display_name() == "b")
            .unwrap();
        gallery.toggle_visibility(b).unwrap();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), vec!["Select Image", "a"]);
        assert_eq!(views.grid.cells().len(), 2);
        assert!(views.grid.cells()[b].hidden);

        gallery.toggle_visibility(1 - b).unwrap();
        gallery.unhide_all();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.labels(), expected);
    }

    #[test]
    fn test_selector_matches_visible_entries() {
        let mut gallery = gallery_of(&["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"]);
        for index in [1, 4, 5, 1, 2] {
            gallery.toggle_visibility(index).unwrap();
            let views = GalleryViews::rebuild(&gallery);
            assert_eq!(views.selector.labels(), expected_selector(&gallery));
        }
    }

    #[test]
    fn test_grid_placement_ignores_hidden_state() {
        let mut gallery = gallery_of(&[
            "a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.png", "h.png", "i.png",
        ]);
        let before = GalleryViews::rebuild(&gallery);

        gallery.toggle_visibility(2).unwrap();
        gallery.toggle_visibility(5).unwrap();
        let after = GalleryViews::rebuild(&gallery);

        for (i, cell) in after.grid.cells().iter().enumerate() {
            assert_eq!(cell.index, i);
            assert_eq!((cell.row, cell.col), (i / 4, i % 4));
        }
        let positions = |v: &GalleryViews| -> Vec<(usize, usize)> {
            v.grid.cells().iter().map(|c| (c.row, c.col)).collect()
        };
        assert_eq!(positions(&before), positions(&after));
        assert_eq!(after.grid.row_count(), 3);

        let row_lengths: Vec<usize> = after.grid.rows().map(|r| r.len()).collect();
        assert_eq!(row_lengths, vec![4, 4, 1]);
    }

    #[test]
    fn test_duplicate_names_stay_distinct() {
        let gallery = gallery_of(&["same.png", "same.jpg"]);
        let views = GalleryViews::rebuild(&gallery);

        let items = views.selector.items();
        assert_eq!(views.selector.labels(), vec!["Select Image", "same", "same"]);
        assert_ne!(items[1], items[2]);
        assert_eq!(items[2].entry, Some(1));
    }

    #[test]
    fn test_reconcile_keeps_or_resets_selection() {
        let mut gallery = gallery_of(&["b.png", "a.jpg"]);
        let views = GalleryViews::rebuild(&gallery);
        let picked = views.selector.items()[2].clone();
        assert_eq!(picked.to_string(), "a");

        gallery.toggle_visibility(0).unwrap();
        let views = GalleryViews::rebuild(&gallery);
        assert_eq!(views.selector.reconcile(&picked), picked);

        gallery.toggle_visibility(1).unwrap();
        let views = GalleryViews::rebuild(&gallery);
        let reconciled = views.selector.reconcile(&picked);
        assert!(reconciled.is_placeholder());
        assert_eq!(reconciled.to_string(), "Select Image");
    }
}
