//! # Roster Grid
//!
//! Turns a category-grouped people directory (a spreadsheet export) into a
//! fixed-grid, paginated CSV data source for a templated print document. Each
//! output row is one printed page: up to two category titles and 45
//! name/photo frames laid out as 3 rows × 15.
//!
//! # Architecture: Pure Core, Thin Edges
//!
//! ```text
//! 1. Import    workbook    →  rows          (calamine)
//! 2. List      photo dir   →  filenames     (walkdir, enumeration order)
//! 3. Convert   rows + list →  table         (pure)
//! 4. Export    table       →  CSV file
//! ```
//!
//! Stage 3 is the interesting part and never touches the filesystem:
//!
//! ```text
//! records → photo resolution → category grouping → page layout → table
//! ```
//!
//! Every step takes its input by reference and returns new values, so the
//! output of each step can be inspected and asserted on independently.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Reduces person names and filenames to comparable letter runs |
//! | [`photo`] | Resolves each record's photo: by name, by agent code, or placeholder |
//! | [`records`] | Spreadsheet rows → [`types::Record`] values |
//! | [`group`] | Groups records by category, in first-appearance order |
//! | [`layout`] | Greedy one-step-lookahead page packing |
//! | [`render`] | Pages → header + fixed-width rows |
//! | [`convert`] | Runs the pure pipeline and tallies photo outcomes |
//! | [`import`] | Workbook reading |
//! | [`listing`] | Photo directory listing |
//! | [`export`] | CSV writing |
//! | [`config`] | `roster-grid.toml` loading, merging, and validation |
//! | [`output`] | CLI summary formatting |
//! | [`types`] | Shared record/page types and grid constants |
//!
//! # Design Decisions
//!
//! ## Greedy Page Packing
//!
//! Pages are filled by looking at one category and the next, never further.
//! Two small categories share a page when their rows fit; a large one spans
//! as many pages as it needs. The result is not the minimal page count, but it
//! is easy to predict by eye from the spreadsheet, which matters more to the
//! person laying out the document. See [`layout`].
//!
//! ## First Match Wins for Photos
//!
//! Photo filenames are matched fuzzily against names. The first listing entry
//! that matches is used, with no attempt to rank candidates. This mirrors how
//! the photo folders are curated in practice and keeps the rule explainable.
//! See [`photo`] for the collision cases this allows.
//!
//! ## Silent Degradation
//!
//! Short rows, blank names, and unknown photo flags are not errors. They flow
//! through as empty cells so a partially filled roster still produces a usable
//! draft. Only I/O and configuration problems stop a run.

pub mod config;
pub mod convert;
pub mod export;
pub mod group;
pub mod import;
pub mod layout;
pub mod listing;
pub mod naming;
pub mod output;
pub mod photo;
pub mod records;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
