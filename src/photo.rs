//! Photo resolution: find the asset file for a roster record.
//!
//! Resolution order for a record that expects a photo:
//!
//! 1. **Name**: the first listing entry whose cleaned filename matches the
//!    cleaned person name (see [`crate::naming`]).
//! 2. **Agent code**: the first entry whose raw filename contains the agent
//!    code verbatim.
//! 3. **Not found**: the configured placeholder.
//!
//! Records marked as having no photo get the silhouette without looking at
//! the listing at all.
//!
//! ## First Match Wins
//!
//! The listing is scanned in the order it was enumerated and the first hit is
//! taken. There is no ranking: with `["AnnLee.png", "Ann.png"]` the record
//! `"Ann"` resolves to `AnnLee.png`, because `"Ann"` is contained in
//! `"AnnLeepng"`. Callers that need a deterministic result across machines
//! should sort the listing themselves.
//!
//! ## Match Modes
//!
//! [`MatchMode::Pattern`] compiles the cleaned name as a case-insensitive
//! regular expression, unescaped. Cleaning leaves only letters, so in practice
//! it behaves like substring search; one visible consequence is that a name
//! with no letters at all becomes the empty pattern and matches the first
//! entry. [`MatchMode::Literal`] does plain case-insensitive containment and
//! never lets an empty name match.
//!
//! Filenames are cleaned once per conversion into a [`PhotoListing`], and each
//! name is compiled once into a [`NameMatcher`] before the listing is scanned.

use crate::naming::{clean_file_token, clean_person_name};
use crate::types::Record;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// How the cleaned person name is compared to cleaned filenames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Cleaned name used as a case-insensitive regex pattern.
    #[default]
    Pattern,
    /// Cleaned name used as an escaped, case-insensitive substring.
    Literal,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pattern" => Ok(MatchMode::Pattern),
            "literal" => Ok(MatchMode::Literal),
            other => Err(format!(
                "unknown match mode '{other}' (expected 'pattern' or 'literal')"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Pattern => f.write_str("pattern"),
            MatchMode::Literal => f.write_str("literal"),
        }
    }
}

/// Path prefixes used to build photo references.
///
/// Each field is a plain string; empty means "not configured". No defaults
/// are derived here, see [`crate::config::PhotosConfig`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoPaths {
    /// Directory prefix joined with the matched filename.
    pub base: String,
    /// Used for records flagged as having no photo.
    pub silhouette: String,
    /// Used when a photo was expected but nothing matched.
    pub not_found: String,
}

/// Outcome of resolving one record against the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoMatch {
    /// Record has no photo.
    Silhouette,
    /// Listing entry matched by person name.
    ByName(String),
    /// Listing entry matched by agent code.
    ByAgentCode(String),
    /// Photo expected, nothing matched.
    NotFound,
}

impl PhotoMatch {
    /// The photo path this outcome stands for.
    pub fn path(&self, paths: &PhotoPaths) -> String {
        match self {
            PhotoMatch::Silhouette => paths.silhouette.clone(),
            PhotoMatch::ByName(entry) | PhotoMatch::ByAgentCode(entry) => {
                format!("{}/{}", paths.base, entry)
            }
            PhotoMatch::NotFound => paths.not_found.clone(),
        }
    }
}

/// One listing entry with its cleaned forms computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// Filename exactly as listed.
    pub name: String,
    /// [`clean_file_token`] of the name.
    cleaned: String,
    /// Lowercased `cleaned`, for literal matching.
    folded: String,
}

impl ListedFile {
    pub fn new(name: &str) -> Self {
        let cleaned = clean_file_token(name);
        let folded = cleaned.to_lowercase();
        Self {
            name: name.to_string(),
            cleaned,
            folded,
        }
    }
}

/// A directory listing prepared once per conversion, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoListing(Vec<ListedFile>);

impl PhotoListing {
    pub fn new(entries: &[String]) -> Self {
        Self(entries.iter().map(|e| ListedFile::new(e)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &ListedFile> {
        self.0.iter()
    }
}

/// A person name compiled once for matching against every listing entry.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Cleaned name as a case-insensitive regex.
    Pattern(Regex),
    /// Lowercased cleaned name, matched by containment.
    Literal(String),
    /// Matches no entry.
    Never,
}

impl NameMatcher {
    pub fn new(name: &str, mode: MatchMode) -> Self {
        let cleaned = clean_person_name(name);
        match mode {
            MatchMode::Pattern => {
                match RegexBuilder::new(&cleaned).case_insensitive(true).build() {
                    Ok(re) => NameMatcher::Pattern(re),
                    Err(e) => {
                        warn!(
                            name,
                            error = %e,
                            "name is not a valid pattern, treating as no match"
                        );
                        NameMatcher::Never
                    }
                }
            }
            MatchMode::Literal if cleaned.is_empty() => NameMatcher::Never,
            MatchMode::Literal => NameMatcher::Literal(cleaned.to_lowercase()),
        }
    }

    /// Whether `file` matches this name.
    pub fn matches(&self, file: &ListedFile) -> bool {
        match self {
            NameMatcher::Pattern(re) => re.is_match(&file.cleaned),
            NameMatcher::Literal(needle) => file.folded.contains(needle.as_str()),
            NameMatcher::Never => false,
        }
    }
}

/// Whether the raw `entry` contains `agent_code` verbatim.
///
/// An empty agent code never matches.
pub fn agent_code_matches(agent_code: &str, entry: &str) -> bool {
    !agent_code.is_empty() && entry.contains(agent_code)
}

/// Find the listing entry for a record, without building a path.
pub fn resolve_match(record: &Record, listing: &PhotoListing, mode: MatchMode) -> PhotoMatch {
    if !record.has_photo {
        return PhotoMatch::Silhouette;
    }
    let matcher = NameMatcher::new(&record.name, mode);
    if let Some(file) = listing.iter().find(|file| matcher.matches(file)) {
        debug!(name = %record.name, entry = %file.name, "photo matched by name");
        return PhotoMatch::ByName(file.name.clone());
    }
    if let Some(file) = listing
        .iter()
        .find(|file| agent_code_matches(&record.agent_code, &file.name))
    {
        debug!(
            name = %record.name,
            agent_code = %record.agent_code,
            entry = %file.name,
            "photo matched by agent code"
        );
        return PhotoMatch::ByAgentCode(file.name.clone());
    }
    warn!(name = %record.name, agent_code = %record.agent_code, "no photo found");
    PhotoMatch::NotFound
}

/// Resolve the photo path for a record.
pub fn resolve(
    record: &Record,
    listing: &PhotoListing,
    paths: &PhotoPaths,
    mode: MatchMode,
) -> String {
    resolve_match(record, listing, mode).path(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{listing, person};

    fn prepared(entries: &[&str]) -> PhotoListing {
        PhotoListing::new(&listing(entries))
    }

    fn paths() -> PhotoPaths {
        PhotoPaths {
            base: "/photos".to_string(),
            silhouette: "/photos/SILHOUETTE.png".to_string(),
            not_found: "/photos/NOT_FOUND.png".to_string(),
        }
    }

    #[test]
    fn no_photo_gets_silhouette() {
        let r = person("J. Smith", "AB123", false);
        let l = prepared(&["JSmith_COT.png"]);
        assert_eq!(resolve_match(&r, &l, MatchMode::Pattern), PhotoMatch::Silhouette);
        assert_eq!(
            resolve(&r, &l, &paths(), MatchMode::Pattern),
            "/photos/SILHOUETTE.png"
        );
    }

    #[test]
    fn matches_by_cleaned_name() {
        let r = person("J. Smith", "", true);
        let l = prepared(&["JSmith_COT.png", "ABrown.png"]);
        assert_eq!(
            resolve(&r, &l, &paths(), MatchMode::Pattern),
            "/photos/JSmith_COT.png"
        );
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let r = person("j smith", "", true);
        let l = prepared(&["JSMITH.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByName("JSMITH.png".to_string())
        );
    }

    #[test]
    fn falls_back_to_agent_code() {
        let r = person("Unknown Person", "AB123", true);
        let l = prepared(&["JSmith_COT.png", "ABrown.png", "report_AB123_final.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByAgentCode("report_AB123_final.png".to_string())
        );
        assert_eq!(
            resolve(&r, &l, &paths(), MatchMode::Pattern),
            "/photos/report_AB123_final.png"
        );
    }

    #[test]
    fn agent_code_match_is_case_sensitive() {
        let r = person("Unknown Person", "AB123", true);
        let l = prepared(&["ab123.png"]);
        assert_eq!(resolve_match(&r, &l, MatchMode::Pattern), PhotoMatch::NotFound);
    }

    #[test]
    fn empty_agent_code_never_matches() {
        assert!(!agent_code_matches("", "anything.png"));
    }

    #[test]
    fn nothing_matches_gives_not_found_placeholder() {
        let r = person("Unknown Person", "ZZ999", true);
        let l = prepared(&["JSmith_COT.png", "ABrown.png"]);
        assert_eq!(
            resolve(&r, &l, &paths(), MatchMode::Pattern),
            "/photos/NOT_FOUND.png"
        );
    }

    #[test]
    fn first_match_wins_in_listing_order() {
        let r = person("Ann", "", true);
        let l = prepared(&["AnnLee.png", "Ann.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByName("AnnLee.png".to_string())
        );

        let reversed = prepared(&["Ann.png", "AnnLee.png"]);
        assert_eq!(
            resolve_match(&r, &reversed, MatchMode::Pattern),
            PhotoMatch::ByName("Ann.png".to_string())
        );
    }

    #[test]
    fn substring_names_collide() {
        // "Li" is contained in "Oliver": the first entry wins even though it is
        // someone else's photo.
        let r = person("Li", "", true);
        let l = prepared(&["Oliver_COT.png", "Li_COT.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByName("Oliver_COT.png".to_string())
        );
    }

    #[test]
    fn name_match_beats_earlier_agent_code_entry() {
        let r = person("J. Smith", "AB123", true);
        let l = prepared(&["AB123.png", "JSmith.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByName("JSmith.png".to_string())
        );
    }

    #[test]
    fn empty_name_pattern_matches_first_entry() {
        let r = person("---", "", true);
        let l = prepared(&["ABrown.png", "JSmith.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Pattern),
            PhotoMatch::ByName("ABrown.png".to_string())
        );
    }

    #[test]
    fn empty_name_literal_does_not_match() {
        let r = person("---", "", true);
        let l = prepared(&["ABrown.png", "JSmith.png"]);
        assert_eq!(resolve_match(&r, &l, MatchMode::Literal), PhotoMatch::NotFound);
    }

    #[test]
    fn literal_mode_matches_substring() {
        let r = person("J. Smith", "", true);
        let l = prepared(&["ABrown.png", "jsmith_cot.png"]);
        assert_eq!(
            resolve_match(&r, &l, MatchMode::Literal),
            PhotoMatch::ByName("jsmith_cot.png".to_string())
        );
    }

    #[test]
    fn empty_listing_is_not_found() {
        let r = person("J. Smith", "AB123", true);
        let empty = PhotoListing::default();
        assert_eq!(resolve_match(&r, &empty, MatchMode::Pattern), PhotoMatch::NotFound);
    }

    #[test]
    fn unconfigured_paths_stay_empty() {
        let empty = PhotoPaths::default();
        assert_eq!(PhotoMatch::Silhouette.path(&empty), "");
        assert_eq!(PhotoMatch::NotFound.path(&empty), "");
        assert_eq!(PhotoMatch::ByName("a.png".into()).path(&empty), "/a.png");
    }

    /// Clean both sides and compile the name for a single entry, the way a
    /// one-off comparison would.
    fn first_match_entry_by_entry(
        name: &str,
        entries: &[&str],
        mode: MatchMode,
    ) -> Option<String> {
        let cleaned_name = clean_person_name(name);
        entries
            .iter()
            .find(|entry| {
                let cleaned_entry = clean_file_token(entry);
                match mode {
                    MatchMode::Pattern => RegexBuilder::new(&cleaned_name)
                        .case_insensitive(true)
                        .build()
                        .unwrap()
                        .is_match(&cleaned_entry),
                    MatchMode::Literal => {
                        !cleaned_name.is_empty()
                            && cleaned_entry
                                .to_lowercase()
                                .contains(&cleaned_name.to_lowercase())
                    }
                }
            })
            .map(|entry| entry.to_string())
    }

    #[test]
    fn prepared_listing_agrees_with_entry_by_entry_matching() {
        let entries = [
            "Oliver_COT.png",
            "report_AB123_final.png",
            "J_Smith_COT_2023.png",
            "ANNLEE.jpg",
            "Ann.png",
            "COTTON_Li.png",
            "Zo\u{e9}Martin.png",
            "archive",
        ];
        let names = [
            "J. Smith",
            "Ann",
            "ann lee",
            "Li",
            "Cotton",
            "Zo\u{e9} Martin",
            "---",
            "Nobody",
        ];
        let l = prepared(&entries);
        for mode in [MatchMode::Pattern, MatchMode::Literal] {
            for name in names {
                let by_name = match resolve_match(&person(name, "", true), &l, mode) {
                    PhotoMatch::ByName(entry) => Some(entry),
                    _ => None,
                };
                assert_eq!(
                    by_name,
                    first_match_entry_by_entry(name, &entries, mode),
                    "{name:?} in {mode} mode"
                );
            }
        }
    }

    #[test]
    fn listing_keeps_enumeration_order() {
        let l = prepared(&["b.png", "a.png"]);
        assert_eq!(l.len(), 2);
        let names: Vec<&str> = l.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.png"]);
        assert!(PhotoListing::default().is_empty());
    }

    #[test]
    fn match_mode_parses_from_str() {
        assert_eq!("pattern".parse::<MatchMode>(), Ok(MatchMode::Pattern));
        assert_eq!("Literal".parse::<MatchMode>(), Ok(MatchMode::Literal));
        assert!("fuzzy".parse::<MatchMode>().is_err());
        assert_eq!(MatchMode::Literal.to_string(), "literal");
    }
}
