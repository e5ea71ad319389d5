//! Table rendering.
//!
//! Expands planned pages into the fixed-width table a design tool's data merge
//! expects: one header row, then one row per page.
//!
//! ```text
//! category1, category2, name1, @photo1, name2, @photo2, …, name45, @photo45
//! Managers,  Staff,     Ann,   /p/a.png, …
//! ```
//!
//! Empty slots are filled with a placeholder name and the silhouette so every
//! frame in the template receives something printable.

use crate::types::{ITEMS_PER_PAGE, MAX_CATEGORIES_PER_PAGE, Page};

/// Name written into unoccupied slots.
pub const FILLER_NAME: &str = "Firstname Lastname";

/// Cells per row: category columns plus a name/photo pair per slot.
pub const ROW_WIDTH: usize = MAX_CATEGORIES_PER_PAGE + 2 * ITEMS_PER_PAGE;

/// The header row.
pub fn header_row() -> Vec<String> {
    let categories = (1..=MAX_CATEGORIES_PER_PAGE).map(|i| format!("category{i}"));
    let slots = (1..=ITEMS_PER_PAGE).flat_map(|i| [format!("name{i}"), format!("@photo{i}")]);
    categories.chain(slots).collect()
}

/// Category label safe for a comma-separated cell.
fn category_label(category: &str) -> String {
    category.replace(',', " | ")
}

/// One table row for `page`.
///
/// `silhouette` fills the photo column of empty slots; pass `""` when no
/// silhouette is configured.
pub fn page_row(page: &Page, silhouette: &str) -> Vec<String> {
    let mut row = Vec::with_capacity(ROW_WIDTH);

    let mut categories = page.categories.iter().map(|c| category_label(c));
    for _ in 0..MAX_CATEGORIES_PER_PAGE {
        row.push(categories.next().unwrap_or_default());
    }

    for position in 1..=ITEMS_PER_PAGE {
        match page.record_at(position) {
            Some(record) => {
                row.push(record.name.clone());
                row.push(record.photo_path.clone());
            }
            None => {
                row.push(FILLER_NAME.to_string());
                row.push(silhouette.to_string());
            }
        }
    }
    row
}

/// Header plus one row per page, in page order.
pub fn render(pages: &[Page], silhouette: &str) -> Vec<Vec<String>> {
    std::iter::once(header_row())
        .chain(pages.iter().map(|page| page_row(page, silhouette)))
        .collect()
}
