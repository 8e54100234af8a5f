// src/filesystem/search.rs
//!
//! Recursive filename search
//!
//! Walks a directory tree and matches a case-insensitive regular expression
//! against each entry's file name. Entries that cannot be read are skipped
//! and reported alongside the matches instead of aborting the walk.

use crate::filesystem::commands::FsError;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a completed search
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Full paths of matching entries, in walk order
    pub matches: Vec<PathBuf>,
    /// Subtrees or entries that could not be read (`FsError::PermissionSkipped`)
    pub skipped: Vec<FsError>,
}

impl SearchReport {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Compile a user pattern the way `find` interprets it
pub fn compile_pattern(pattern: &str) -> Result<Regex, FsError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FsError::InvalidArgument {
            reason: format!("Invalid pattern '{}': {}", pattern, e),
        })
}

/// Search every entry below `root` whose file name matches `pattern`.
///
/// `root` is read once up front; the walk never consults anything else to
/// decide where to descend. Directory symlinks are reported but not entered.
pub fn find(root: &Path, pattern: &str) -> Result<SearchReport, FsError> {
    let regex = compile_pattern(pattern)?;

    if !root.exists() {
        return Err(FsError::NotFound {
            path: root.to_string_lossy().to_string(),
        });
    }

    let mut report = SearchReport::default();

    walk(root, &regex, &mut report);

    Ok(report)
}

fn walk(dir: &Path, regex: &Regex, report: &mut SearchReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            skip(report, dir, e);
            return;
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => children.push(entry),
            Err(e) => skip(report, dir, e),
        }
    }
    children.sort_by_key(|entry| entry.file_name());

    for entry in children {
        let path = entry.path();
        let name = entry.file_name();

        if regex.is_match(&name.to_string_lossy()) {
            report.matches.push(path.clone());
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => walk(&path, regex, report),
            Ok(_) => {}
            Err(e) => skip(report, &path, e),
        }
    }
}

fn skip(report: &mut SearchReport, path: &Path, error: std::io::Error) {
    tracing::debug!(path = %path.display(), error = %error, "search skipped entry");
    report.skipped.push(FsError::PermissionSkipped {
        path: path.to_string_lossy().to_string(),
        reason: error.to_string(),
    });
}
