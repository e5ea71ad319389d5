//! Category grouping.
//!
//! Partitions records into one group per category. Groups are kept in the
//! order each category first appears in the input, and that order is the page
//! order the layout planner produces. Within a group, records keep their input
//! order and are numbered `1..=N`.
//!
//! Interleaved input is allowed: `[A, B, A]` yields group `A` with positions
//! 1 and 2, then group `B` with position 1.

use crate::types::Record;
use indexmap::IndexMap;
use serde::Serialize;

/// Records grouped by category, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryGroups(IndexMap<String, Vec<Record>>);

impl CategoryGroups {
    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records of `category`, if present.
    pub fn get(&self, category: &str) -> Option<&[Record]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Category names in group order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Group at a 0-based index in group order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &[Record])> {
        self.0
            .get_index(index)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total records across all groups.
    pub fn record_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Group records by category and number them within each group.
///
/// Each output record is a new value; the input slice is not modified.
pub fn group(records: &[Record]) -> CategoryGroups {
    let groups = records
        .iter()
        .fold(IndexMap::<String, Vec<Record>>::new(), |mut acc, record| {
            let members = acc.entry(record.category.clone()).or_default();
            let next_position = members.len() + 1;
            members.push(record.at_position(next_position));
            acc
        });
    CategoryGroups(groups)
}
