//! End-to-end conversion: raw rows + directory listing → table.
//!
//! ```text
//! rows ──records──▶ Vec<Record> ──photo──▶ resolved ──group──▶ CategoryGroups
//!                                                                   │
//!           table ◀──render── Vec<Page> ◀──────────layout───────────┘
//! ```
//!
//! Every stage is a pure function over in-memory data. Reading the workbook,
//! listing the photo directory, and writing the CSV happen outside, in
//! [`crate::import`], [`crate::listing`] and [`crate::export`].

use crate::config::RosterConfig;
use crate::group::group;
use crate::layout::plan;
use crate::photo::{PhotoListing, PhotoMatch, resolve_match};
use crate::records::read_records;
use crate::render::render;
use crate::types::{Page, Record};
use serde::Serialize;

/// Photo resolution tally for one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhotoReport {
    /// Matched by cleaned person name.
    pub by_name: usize,
    /// Matched by agent code after the name found nothing.
    pub by_agent_code: usize,
    /// Flagged as having no photo.
    pub silhouette: usize,
    /// Names of people whose expected photo was not found, in input order.
    pub not_found: Vec<String>,
}

impl PhotoReport {
    fn tally(mut self, record: &Record, outcome: &PhotoMatch) -> Self {
        match outcome {
            PhotoMatch::Silhouette => self.silhouette += 1,
            PhotoMatch::ByName(_) => self.by_name += 1,
            PhotoMatch::ByAgentCode(_) => self.by_agent_code += 1,
            PhotoMatch::NotFound => self.not_found.push(record.name.clone()),
        }
        self
    }

    /// Records that went through resolution.
    pub fn total(&self) -> usize {
        self.by_name + self.by_agent_code + self.silhouette + self.not_found.len()
    }
}

/// Everything one conversion produces.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Records in input order, photo paths resolved, positions as imported.
    pub records: Vec<Record>,
    /// Planned pages.
    pub pages: Vec<Page>,
    /// Header row plus one row per page.
    pub table: Vec<Vec<String>>,
    pub photos: PhotoReport,
}

/// Run the full pipeline on already-materialized inputs.
pub fn convert(rows: &[Vec<String>], listing: &[String], config: &RosterConfig) -> Conversion {
    let paths = config.photos.paths();
    let mode = config.photos.match_mode;
    let listing = PhotoListing::new(listing);

    let (records, photos) = read_records(rows, &config.input).into_iter().fold(
        (Vec::new(), PhotoReport::default()),
        |(mut records, report), record| {
            let outcome = resolve_match(&record, &listing, mode);
            let report = report.tally(&record, &outcome);
            records.push(Record {
                photo_path: outcome.path(&paths),
                ..record
            });
            (records, report)
        },
    );

    let pages = plan(&group(&records));
    let table = render(&pages, &paths.silhouette);

    Conversion {
        records,
        pages,
        table,
        photos,
    }
}
