//! Converter configuration.
//!
//! Handles loading, validating, and merging `roster-grid.toml`. Stock defaults
//! match the usual directory export: four preamble rows, one header row, and
//! columns in the order `id, country, name, agent code, category, photo flag`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [input]
//! sheet = ""                # Worksheet name; empty = first sheet
//! skip_rows = 4             # Preamble rows above the header
//! header_rows = 1           # Header rows skipped after the preamble
//! has_photo_flag = "Y"      # Exact cell value meaning "has a photo"
//!
//! [input.columns]
//! id = 0
//! country = 1
//! name = 2
//! agent_code = 3
//! category = 4
//! has_photo = 5
//!
//! [photos]
//! base_path = ""            # Prefix joined with matched filenames
//! silhouette_path = "..."   # Omit for "<base_path>/SILHOUETTE.png" ("" without a base)
//! not_found_path = "..."    # Omit for "<base_path>/NOT_FOUND.png" ("" without a base)
//! match_mode = "pattern"    # "pattern" or "literal"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! [photos]
//! base_path = "/Volumes/Design/Photos"
//! ```
//!
//! Setting `silhouette_path = ""` explicitly disables the silhouette instead
//! of deriving it. With no `base_path` nothing is derived and both
//! placeholders stay empty. Unknown keys are rejected to catch typos early.

use crate::photo::{MatchMode, PhotoPaths};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "roster-grid.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Converter configuration loaded from `roster-grid.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Where records live in the spreadsheet.
    pub input: InputConfig,
    /// Photo path prefixes and matching behavior.
    pub photos: PhotosConfig,
}

impl RosterConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let columns = self.input.columns.indices();
        for (i, (name, index)) in columns.iter().enumerate() {
            if let Some((other, _)) = columns[i + 1..].iter().find(|(_, o)| o == index) {
                return Err(ConfigError::Validation(format!(
                    "input.columns.{name} and input.columns.{other} both use column {index}"
                )));
            }
        }
        if self.input.has_photo_flag.is_empty() {
            return Err(ConfigError::Validation(
                "input.has_photo_flag must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Spreadsheet shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Worksheet to read. Empty selects the first worksheet.
    pub sheet: String,
    /// Preamble rows above the header.
    pub skip_rows: usize,
    /// Header rows after the preamble.
    pub header_rows: usize,
    /// Cell value that marks a record as having a photo. Compared exactly.
    pub has_photo_flag: String,
    /// 0-based column indices.
    pub columns: ColumnsConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sheet: String::new(),
            skip_rows: 4,
            header_rows: 1,
            has_photo_flag: "Y".to_string(),
            columns: ColumnsConfig::default(),
        }
    }
}

impl InputConfig {
    /// Rows before the first data row.
    pub fn leading_rows(&self) -> usize {
        self.skip_rows + self.header_rows
    }
}

/// 0-based column index of each record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsConfig {
    pub id: usize,
    pub country: usize,
    pub name: usize,
    pub agent_code: usize,
    pub category: usize,
    pub has_photo: usize,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            id: 0,
            country: 1,
            name: 2,
            agent_code: 3,
            category: 4,
            has_photo: 5,
        }
    }
}

impl ColumnsConfig {
    /// `(field, index)` pairs, for validation messages.
    fn indices(&self) -> [(&'static str, usize); 6] {
        [
            ("id", self.id),
            ("country", self.country),
            ("name", self.name),
            ("agent_code", self.agent_code),
            ("category", self.category),
            ("has_photo", self.has_photo),
        ]
    }
}

/// Photo path prefixes and matching behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotosConfig {
    /// Prefix joined with matched filenames as `<base_path>/<file>`.
    pub base_path: String,
    /// Photo for records without one. `None` derives `<base_path>/SILHOUETTE.png`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silhouette_path: Option<String>,
    /// Photo when nothing matched. `None` derives `<base_path>/NOT_FOUND.png`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found_path: Option<String>,
    /// How names are compared to filenames.
    pub match_mode: MatchMode,
}

impl PhotosConfig {
    /// `<base_path>/<file>`, or empty when no base path is configured.
    fn derived_path(&self, file: &str) -> String {
        if self.base_path.is_empty() {
            String::new()
        } else {
            format!("{}/{}", self.base_path, file)
        }
    }

    /// Silhouette path, derived from `base_path` when not set.
    pub fn effective_silhouette_path(&self) -> String {
        self.silhouette_path
            .clone()
            .unwrap_or_else(|| self.derived_path("SILHOUETTE.png"))
    }

    /// Not-found placeholder path, derived from `base_path` when not set.
    pub fn effective_not_found_path(&self) -> String {
        self.not_found_path
            .clone()
            .unwrap_or_else(|| self.derived_path("NOT_FOUND.png"))
    }

    /// Concrete paths handed to the photo resolver.
    pub fn paths(&self) -> PhotoPaths {
        PhotoPaths {
            base: self.base_path.clone(),
            silhouette: self.effective_silhouette_path(),
            not_found: self.effective_not_found_path(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(RosterConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<RosterConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: RosterConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
pub fn load_config(path: &Path) -> Result<RosterConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Returns a fully-commented stock `roster-grid.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# roster-grid configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Spreadsheet input
# ---------------------------------------------------------------------------
[input]
# Worksheet to read. Leave empty to use the first worksheet.
sheet = ""

# Rows above the header (titles, export dates, blank lines).
skip_rows = 4

# Header rows skipped after the preamble. Data starts on the next row.
header_rows = 1

# Exact cell value that marks a person as having a photo.
# Anything else (including "y" or an empty cell) means no photo.
has_photo_flag = "Y"

# 0-based column index of each field. Indices must be distinct.
[input.columns]
id = 0
country = 1
name = 2
agent_code = 3
category = 4
has_photo = 5

# ---------------------------------------------------------------------------
# Photos
# ---------------------------------------------------------------------------
[photos]
# Prefix for matched photos, written as "<base_path>/<filename>".
# Use the path the design tool will see, not necessarily a local one.
base_path = ""

# Photo for people without one. Omit to use "<base_path>/SILHOUETTE.png"
# (empty when base_path is empty).
# Set to "" to leave the cell empty.
# silhouette_path = "/Volumes/Design/Photos/SILHOUETTE.png"

# Photo when a person should have one but no file matched.
# Omit to use "<base_path>/NOT_FOUND.png".
# not_found_path = "/Volumes/Design/Photos/NOT_FOUND.png"

# How names are compared to filenames (after both are reduced to letters):
#   "pattern" - the name is used as a case-insensitive regular expression
#   "literal" - plain case-insensitive substring; an empty name never matches
match_mode = "pattern"
"##
}
