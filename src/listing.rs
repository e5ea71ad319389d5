//! Photo directory listing.
//!
//! Collects the names of the entries directly inside the photo directory,
//! files and subdirectories alike, in the order the filesystem enumerates
//! them. The order is deliberately left alone: photo matching is
//! first-match-wins, and sorting here would silently change which photo a
//! fuzzy name picks. Sort the result yourself if you need reproducibility
//! across machines.
//!
//! Names that are not valid UTF-8 are skipped with a warning: a lossy
//! conversion would produce a photo path that points at no file.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Photo directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Cannot read photo directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Entry names directly inside `dir`, in enumeration order.
pub fn list_directory(dir: &Path) -> Result<Vec<String>, ListingError> {
    if !dir.is_dir() {
        return Err(ListingError::NotFound(dir.to_path_buf()));
    }
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                path = %entry.path().display(),
                "skipping entry whose name is not valid UTF-8"
            ),
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_directories_one_level_deep() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("JSmith_COT.png"), b"").unwrap();
        fs::write(tmp.path().join("ABrown.png"), b"").unwrap();
        fs::create_dir(tmp.path().join("archive")).unwrap();
        fs::write(tmp.path().join("archive/Old.png"), b"").unwrap();

        let mut names = list_directory(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["ABrown.png", "JSmith_COT.png", "archive"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ABrown.png"), b"").unwrap();
        fs::write(tmp.path().join(OsStr::from_bytes(b"J\xffSmith.png")), b"").unwrap();

        assert_eq!(list_directory(tmp.path()).unwrap(), vec!["ABrown.png"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(list_directory(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_directory(&tmp.path().join("missing"));
        assert!(matches!(result, Err(ListingError::NotFound(_))));
    }

    #[test]
    fn file_instead_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("photo.png");
        fs::write(&file, b"").unwrap();
        assert!(matches!(list_directory(&file), Err(ListingError::NotFound(_))));
    }
}
