//! Raw spreadsheet rows → roster records.
//!
//! The leading preamble and header rows are skipped, then every remaining row
//! becomes one [`Record`]. Rows are never rejected: a missing cell reads as the
//! empty string and flows through to the output unchanged.

use crate::config::InputConfig;
use crate::types::Record;

/// Rows after the preamble and header.
pub fn data_rows<'a>(rows: &'a [Vec<String>], input: &InputConfig) -> &'a [Vec<String>] {
    rows.get(input.leading_rows()..).unwrap_or_default()
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Build a record from one data row. Position starts at 1 and the photo path
/// is left empty.
pub fn record_from_row(row: &[String], input: &InputConfig) -> Record {
    let columns = &input.columns;
    Record {
        id: cell(row, columns.id),
        country: cell(row, columns.country),
        name: cell(row, columns.name),
        agent_code: cell(row, columns.agent_code),
        category: cell(row, columns.category),
        has_photo: row
            .get(columns.has_photo)
            .is_some_and(|flag| *flag == input.has_photo_flag),
        position: 1,
        photo_path: String::new(),
    }
}

/// All data rows as records, without photo resolution. Photo paths are
/// filled in by [`crate::convert::convert`].
pub fn read_records(rows: &[Vec<String>], input: &InputConfig) -> Vec<Record> {
    data_rows(rows, input)
        .iter()
        .map(|row| record_from_row(row, input))
        .collect()
}
