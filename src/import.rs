//! Spreadsheet import.
//!
//! Reads one worksheet into rows of strings, the shape [`crate::records`]
//! consumes. Any format `calamine` recognizes works (`.xlsx`, `.xlsm`,
//! `.xls`, `.ods`).
//!
//! Row and column indices stay absolute: a sheet whose used range starts at
//! `B3` still yields two leading empty rows and a leading empty cell per row,
//! so configured column numbers keep matching the spreadsheet's letters.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Cannot read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Worksheet '{sheet}' not found. Available: {available:?}")]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    #[error("Workbook has no worksheets: {0}")]
    NoSheets(PathBuf),
}

/// Render one cell as the text the converter works with.
///
/// Integral numbers print without a fractional part (`12.0` → `"12"`).
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Read a worksheet as rows of strings.
///
/// `sheet` selects a worksheet by name; an empty name selects the first one.
pub fn read_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();

    let name = if sheet.is_empty() {
        available
            .first()
            .cloned()
            .ok_or_else(|| ImportError::NoSheets(path.to_path_buf()))?
    } else if available.iter().any(|n| n == sheet) {
        sheet.to_string()
    } else {
        return Err(ImportError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    };

    let range = workbook.worksheet_range(&name)?;
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    debug!(sheet = %name, first_row, first_col, "reading worksheet");

    let leading = (0..first_row).map(|_| Vec::new());
    let body = range.rows().map(|cells| {
        std::iter::repeat_n(String::new(), first_col as usize)
            .chain(cells.iter().map(cell_text))
            .collect()
    });
    Ok(leading.chain(body).collect())
}
