//! CSV export.
//!
//! Writes the rendered table in the format design tools' data merge reads:
//! every field double-quoted, fields separated by commas, rows separated by
//! `\n`. Embedded double quotes are doubled (`Ann "Red" Lee` →
//! `"Ann ""Red"" Lee"`). No trailing newline after the last row.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Table as CSV text.
pub fn to_csv_string(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|field| quote_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the table as CSV to `path`, creating parent directories.
pub fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, to_csv_string(rows)).map_err(wrap)
}
