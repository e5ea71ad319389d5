//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Each page leads with its positional index and the categories it carries;
//! slot ranges are shown as indented context lines. This reads like the
//! printed document's table of contents, which is what an operator checks
//! before handing the CSV to the designer.
//!
//! # Output Format
//!
//! ```text
//! Pages
//! 001 Managers + Staff (10 records)
//!     Managers: slots 1-5
//!     Staff: slots 16-20
//! 002 Sales (45 records)
//!     Sales: slots 1-45
//!
//! Photos
//!     By name: 8
//!     By agent code: 1
//!     Silhouette: 1
//!     Not found: 2
//!         Ghost Person
//!         (unnamed)
//!
//! Wrote 2 pages → data-source.csv
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::convert::{Conversion, PhotoReport};
use crate::types::Page;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Category label for display; the empty category is shown as `(none)`.
fn category_title(category: &str) -> &str {
    if category.is_empty() { "(none)" } else { category }
}

/// Page header: index, categories joined with `+`, record count.
///
/// ```text
/// 001 Managers + Staff (10 records)
/// ```
fn page_header(page: &Page) -> String {
    let titles: Vec<&str> = page.categories.iter().map(|c| category_title(c)).collect();
    let noun = if page.len() == 1 { "record" } else { "records" };
    format!(
        "{} {} ({} {})",
        format_index(page.index),
        titles.join(" + "),
        page.len(),
        noun
    )
}

/// Slot span of one category on a page: `"slots 16-20"` or `"slot 3"`.
fn slot_span(page: &Page, category: &str) -> String {
    let mut positions = page.records_in(category).map(|r| r.position);
    let first = positions.next().unwrap_or(0);
    let last = positions.last().unwrap_or(first);
    if first == last {
        format!("slot {first}")
    } else {
        format!("slots {first}-{last}")
    }
}

/// Format the page plan.
pub fn format_plan_output(pages: &[Page]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    if pages.is_empty() {
        lines.push(format!("{}(no records)", indent(1)));
    }
    for page in pages {
        lines.push(page_header(page));
        for category in &page.categories {
            lines.push(format!(
                "{}{}: {}",
                indent(1),
                category_title(category),
                slot_span(page, category)
            ));
        }
    }
    lines
}

/// Format the photo resolution tally.
pub fn format_photo_report(report: &PhotoReport) -> Vec<String> {
    let mut lines = vec![
        "Photos".to_string(),
        format!("{}By name: {}", indent(1), report.by_name),
        format!("{}By agent code: {}", indent(1), report.by_agent_code),
        format!("{}Silhouette: {}", indent(1), report.silhouette),
        format!("{}Not found: {}", indent(1), report.not_found.len()),
    ];
    lines.extend(report.not_found.iter().map(|name| {
        let shown = if name.trim().is_empty() { "(unnamed)" } else { name.as_str() };
        format!("{}{}", indent(2), shown)
    }));
    lines
}

/// Format the full conversion summary, with the written file if any.
pub fn format_conversion_output(conversion: &Conversion, written: Option<&Path>) -> Vec<String> {
    let mut lines = format_plan_output(&conversion.pages);
    lines.push(String::new());
    lines.extend(format_photo_report(&conversion.photos));
    if let Some(path) = written {
        let noun = if conversion.pages.len() == 1 { "page" } else { "pages" };
        lines.push(String::new());
        lines.push(format!(
            "Wrote {} {} → {}",
            conversion.pages.len(),
            noun,
            path.display()
        ));
    }
    lines
}

/// Print the conversion summary to stdout.
pub fn print_conversion_output(conversion: &Conversion, written: Option<&Path>) {
    for line in format_conversion_output(conversion, written) {
        println!("{}", line);
    }
}
