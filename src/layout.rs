//! Page layout planning.
//!
//! Packs category groups onto fixed 45-slot pages (3 rows × 15 slots). The
//! planner walks the groups once, front to back, and makes one decision per
//! step by looking only at the current group and the one right after it:
//!
//! | Condition | Placement |
//! |-----------|-----------|
//! | `rows(current) + rows(next) <= 3` | **Merge**: both groups share one page |
//! | `rows(current) >= 3` | **Split**: `current` fills `ceil(len / 45)` pages |
//! | otherwise | **Alone**: `current` gets a page to itself |
//!
//! where `rows(g) = ceil(len(g) / 15)`.
//!
//! ## Slot Positions
//!
//! - Merged: the first group keeps its positions; the second is shifted down
//!   by `rows(current) * 15`, so it starts on a fresh grid row.
//! - Split: every page restarts at position 1.
//! - Alone: positions are unchanged.
//!
//! ## Why Greedy
//!
//! The planner never searches for a minimal page count. A human lays out the
//! printed document next to the roster, and a one-step-ahead rule keeps the
//! result predictable: reordering two categories late in the sheet never
//! moves pages near the front.
//!
//! ## Page Numbering
//!
//! Pages are numbered `1..=N` without gaps. Each step advances the cursor past
//! the groups it placed (two for a merge, one otherwise) and the page counter
//! by the number of pages it emitted.

use crate::group::CategoryGroups;
use crate::types::{ITEMS_PER_PAGE, ITEMS_PER_ROW, Page, ROWS_PER_PAGE, Record};
use tracing::debug;

/// Grid rows a group of `len` records needs.
pub fn rows_for(len: usize) -> usize {
    len.div_ceil(ITEMS_PER_ROW)
}

/// How the planner places the current group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Current and next group share one page.
    Merge,
    /// Current group spans `pages` pages on its own.
    Split { pages: usize },
    /// Current group gets one page to itself.
    Alone,
}

/// Decide the placement for a group of `current_len` records followed by a
/// group of `next_len` records (`None` when current is the last group).
pub fn decide(current_len: usize, next_len: Option<usize>) -> Placement {
    let current_rows = rows_for(current_len);
    if let Some(next_len) = next_len {
        if current_rows + rows_for(next_len) <= ROWS_PER_PAGE {
            return Placement::Merge;
        }
    }
    if current_rows >= ROWS_PER_PAGE {
        Placement::Split {
            pages: current_len.div_ceil(ITEMS_PER_PAGE),
        }
    } else {
        Placement::Alone
    }
}

/// Planner position between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlanState {
    /// Index of the next group to place.
    cursor: usize,
    /// Number the next emitted page gets.
    next_page: usize,
}

impl PlanState {
    fn start() -> Self {
        Self {
            cursor: 0,
            next_page: 1,
        }
    }
}

/// Plan pages for all groups, in group order.
pub fn plan(groups: &CategoryGroups) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut state = PlanState::start();
    while state.cursor < groups.len() {
        let (placed, next_state) = step(groups, state);
        pages.extend(placed);
        state = next_state;
    }
    pages
}

/// Place the group at `state.cursor` (and possibly the one after it).
fn step(groups: &CategoryGroups, state: PlanState) -> (Vec<Page>, PlanState) {
    let Some((category, current)) = groups.get_index(state.cursor) else {
        return (Vec::new(), state);
    };
    let next = groups.get_index(state.cursor + 1);
    let placement = decide(current.len(), next.map(|(_, records)| records.len()));
    debug!(
        category,
        records = current.len(),
        page = state.next_page,
        ?placement,
        "placing category"
    );

    match (placement, next) {
        (Placement::Merge, Some((_, next_records))) => {
            let page = merge_page(state.next_page, current, next_records);
            (
                vec![page],
                PlanState {
                    cursor: state.cursor + 2,
                    next_page: state.next_page + 1,
                },
            )
        }
        (Placement::Split { .. }, _) => {
            let pages = split_pages(state.next_page, current);
            let emitted = pages.len();
            (
                pages,
                PlanState {
                    cursor: state.cursor + 1,
                    next_page: state.next_page + emitted,
                },
            )
        }
        _ => (
            vec![Page::new(state.next_page, current.iter().cloned())],
            PlanState {
                cursor: state.cursor + 1,
                next_page: state.next_page + 1,
            },
        ),
    }
}

/// One page holding `current` followed by `next`, shifted onto fresh rows.
fn merge_page(index: usize, current: &[Record], next: &[Record]) -> Page {
    let shift = rows_for(current.len()) * ITEMS_PER_ROW;
    let shifted = next.iter().map(|r| r.at_position(r.position + shift));
    Page::new(index, current.iter().cloned().chain(shifted))
}

/// Consecutive full pages for an oversized group, positions restarting at 1.
fn split_pages(first_index: usize, records: &[Record]) -> Vec<Page> {
    records
        .chunks(ITEMS_PER_PAGE)
        .enumerate()
        .map(|(chunk, members)| {
            let offset = chunk * ITEMS_PER_PAGE;
            let renumbered = members
                .iter()
                .map(|r| r.at_position(r.position.saturating_sub(offset).max(1)));
            Page::new(first_index + chunk, renumbered)
        })
        .collect()
}
