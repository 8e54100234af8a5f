// src/shell/resolver.rs
//!
//! Current-directory cursor and path resolution
//!
//! `PathResolver` owns the only mutable cursor in the program. Every other
//! command reads it through `resolve`; only `change_directory` and
//! `go_to_parent` replace it, and only after the new location is known to
//! be a directory.

use crate::filesystem::FsError;
use std::path::{Path, PathBuf};

/// Outcome of `cd ..`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Changed(PathBuf),
    AlreadyAtRoot,
}

#[derive(Debug, Clone)]
pub struct PathResolver {
    cursor: PathBuf,
}

impl PathResolver {
    /// Start at `cursor` as given. Callers pass an absolute directory.
    pub fn new(cursor: PathBuf) -> Self {
        Self { cursor }
    }

    /// Start at the process working directory
    pub fn from_current_dir() -> Result<Self, FsError> {
        let cwd = std::env::current_dir().map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read working directory: {}", e),
        })?;
        Ok(Self::new(cwd.canonicalize().unwrap_or(cwd)))
    }

    pub fn current(&self) -> &Path {
        &self.cursor
    }

    /// Absolute arguments are returned unchanged, relative ones are joined
    /// onto the cursor. Nothing is checked or canonicalized.
    pub fn resolve(&self, argument: &str) -> PathBuf {
        let path = Path::new(argument);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cursor.join(path)
        }
    }

    /// Move the cursor to `argument`. The cursor is untouched on failure.
    pub fn change_directory(&mut self, argument: &str) -> Result<&Path, FsError> {
        let target = self.resolve(argument);

        if !target.exists() {
            return Err(FsError::NotFound {
                path: argument.to_string(),
            });
        }

        if !target.is_dir() {
            return Err(FsError::NotADirectory {
                path: argument.to_string(),
            });
        }

        let canonical = target
            .canonicalize()
            .map_err(|e| FsError::OperationFailed {
                reason: format!("Failed to resolve '{}': {}", argument, e),
            })?;

        tracing::debug!(from = %self.cursor.display(), to = %canonical.display(), "cursor moved");
        self.cursor = canonical;
        Ok(&self.cursor)
    }

    /// Step to the parent directory; a no-op at the filesystem root
    pub fn go_to_parent(&mut self) -> Navigation {
        let Some(parent) = self.cursor.parent().map(Path::to_path_buf) else {
            return Navigation::AlreadyAtRoot;
        };

        self.cursor = parent;
        Navigation::Changed(self.cursor.clone())
    }
}
