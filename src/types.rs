//! Shared types passed between the conversion stages.
//!
//! Records flow one way through the pipeline (import → group → layout →
//! render). No stage mutates a record it received: every position change
//! produces a new [`Record`] value, so earlier stage outputs stay intact.

use serde::Serialize;
use std::collections::BTreeMap;

/// Slots on one printed page (3 rows × 15 columns).
pub const ITEMS_PER_PAGE: usize = 45;
/// Slots in one grid row.
pub const ITEMS_PER_ROW: usize = 15;
/// Grid rows on one page.
pub const ROWS_PER_PAGE: usize = ITEMS_PER_PAGE / ITEMS_PER_ROW;
/// Distinct categories a page may show.
pub const MAX_CATEGORIES_PER_PAGE: usize = 2;

/// One roster entry: a person, their category, and the resolved photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: String,
    pub country: String,
    pub name: String,
    pub agent_code: String,
    /// Grouping key. The empty string is a category of its own.
    pub category: String,
    pub has_photo: bool,
    /// 1-based slot on the record's page. Assigned by the grouper, then
    /// shifted or renumbered by the layout planner.
    pub position: usize,
    pub photo_path: String,
}

impl Record {
    /// Copy of this record placed at `position`.
    pub fn at_position(&self, position: usize) -> Record {
        Record {
            position,
            ..self.clone()
        }
    }
}

/// One planned page of the output grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub index: usize,
    /// Categories on the page, in slot order. At most [`MAX_CATEGORIES_PER_PAGE`].
    pub categories: Vec<String>,
    /// Occupied slots keyed by position (`1..=ITEMS_PER_PAGE`).
    pub slots: BTreeMap<usize, Record>,
}

impl Page {
    /// Build a page from already-positioned records.
    ///
    /// Categories are collected in the order they first appear by slot.
    pub fn new(index: usize, records: impl IntoIterator<Item = Record>) -> Page {
        let slots: BTreeMap<usize, Record> = records
            .into_iter()
            .map(|record| (record.position, record))
            .collect();
        let mut categories: Vec<String> = Vec::new();
        for record in slots.values() {
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
        }
        Page {
            index,
            categories,
            slots,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record in slot `position`, if any.
    pub fn record_at(&self, position: usize) -> Option<&Record> {
        self.slots.get(&position)
    }

    /// Records of one category on this page, in slot order.
    pub fn records_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Record> {
        self.slots.values().filter(move |r| r.category == category)
    }
}
