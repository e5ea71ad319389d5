//! Shared test utilities for the roster-grid test suite.
//!
//! Builders for records, listings, and raw spreadsheet rows, plus page
//! lookups that panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let records = category("Staff", 50);
//! let pages = plan(&group(&records));
//! assert_eq!(page_sizes(&pages), vec![45, 5]);
//! ```

use crate::types::{Page, Record};

// =========================================================================
// Builders
// =========================================================================

/// A record with the given name, category and position, no photo.
pub fn record(name: &str, category: &str, position: usize) -> Record {
    Record {
        id: String::new(),
        country: String::new(),
        name: name.to_string(),
        agent_code: String::new(),
        category: category.to_string(),
        has_photo: false,
        position,
        photo_path: String::new(),
    }
}

/// A record for photo resolution tests.
pub fn person(name: &str, agent_code: &str, has_photo: bool) -> Record {
    Record {
        agent_code: agent_code.to_string(),
        has_photo,
        ..record(name, "", 1)
    }
}

/// `count` records named `<category> 1..=count`, all at position 1.
pub fn category(name: &str, count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| record(&format!("{name} {i}"), name, 1))
        .collect()
}

/// Concatenate several categories built with [`category`].
pub fn categories(sizes: &[(&str, usize)]) -> Vec<Record> {
    sizes
        .iter()
        .flat_map(|(name, count)| category(name, *count))
        .collect()
}

/// Owned directory listing from string literals.
pub fn listing(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

/// One raw spreadsheet row from string literals.
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// The 5 leading rows (4 preamble + 1 header) the importer skips.
pub fn preamble() -> Vec<Vec<String>> {
    vec![
        row(&["Company Directory"]),
        row(&[]),
        row(&["Generated", "2024-01-01"]),
        row(&[]),
        row(&["ID", "Country", "Name", "Agent Code", "Category", "Photo"]),
    ]
}

// =========================================================================
// Page lookups
// =========================================================================

/// Occupied slot count per page.
pub fn page_sizes(pages: &[Page]) -> Vec<usize> {
    pages.iter().map(|p| p.len()).collect()
}

/// Positions of one category on a page, in slot order.
pub fn positions_of(page: &Page, category: &str) -> Vec<usize> {
    page.records_in(category).map(|r| r.position).collect()
}

/// Find a page by 1-based index. Panics if not found.
pub fn find_page(pages: &[Page], index: usize) -> &Page {
    pages.iter().find(|p| p.index == index).unwrap_or_else(|| {
        let indices: Vec<usize> = pages.iter().map(|p| p.index).collect();
        panic!("page {index} not found. Available: {indices:?}")
    })
}
