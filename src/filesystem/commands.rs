// src/filesystem/commands.rs
//!
//! Generic filesystem operations
//!
//! Every function here performs exactly one filesystem step on an already
//! resolved path. Callers are responsible for turning user input into
//! absolute paths first.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum FsError {
    #[error("'{path}' not found")]
    NotFound { path: String },

    #[error("'{path}' already exists")]
    AlreadyExists { path: String },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: String },

    #[error("{reason}")]
    InvalidArgument { reason: String },

    #[error("{reason}")]
    OperationFailed { reason: String },

    #[error("Skipped '{path}': {reason}")]
    PermissionSkipped { path: String, reason: String },
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (not full path)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    pub kind: EntryKind,
    /// File size in bytes, only set for regular files
    pub size: Option<u64>,
}

/// What `remove` actually deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    File,
    /// Number of entries the directory recursively contained
    Directory { removed: u64 },
}

// ============================================================================
// Operations
// ============================================================================

/// Read directory contents
pub fn read_dir(path: &Path) -> Result<Vec<DirEntry>, FsError> {
    if !path.exists() {
        return Err(FsError::NotFound {
            path: display(path),
        });
    }

    if !path.is_dir() {
        return Err(FsError::NotADirectory {
            path: display(path),
        });
    }

    let mut entries = Vec::new();

    for entry in fs::read_dir(path).map_err(|e| FsError::OperationFailed {
        reason: format!("Failed to read directory '{}': {}", path.display(), e),
    })? {
        let entry = entry.map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read entry: {}", e),
        })?;

        let metadata = entry.metadata().map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read metadata: {}", e),
        })?;

        // Symlinks report their own metadata here; follow them only for the kind
        let is_directory = metadata.is_dir() || entry.path().is_dir();

        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            kind: if is_directory {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: if metadata.is_file() {
                Some(metadata.len())
            } else {
                None
            },
        });
    }

    // Sort: directories first, then files, both alphabetically
    entries.sort_by(|a, b| match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::File) => std::cmp::Ordering::Less,
        (EntryKind::File, EntryKind::Directory) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

/// Create an empty file. Fails if anything already exists at `path`.
pub fn create_file(path: &Path) -> Result<(), FsError> {
    if path.exists() {
        return Err(FsError::AlreadyExists {
            path: display(path),
        });
    }

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to create file '{}': {}", path.display(), e),
        })?;

    tracing::info!(path = %path.display(), "file created");
    Ok(())
}

/// Create a single directory (parents must already exist)
pub fn create_dir(path: &Path) -> Result<(), FsError> {
    if path.exists() {
        return Err(FsError::AlreadyExists {
            path: display(path),
        });
    }

    fs::create_dir(path).map_err(|e| FsError::OperationFailed {
        reason: format!("Failed to create directory '{}': {}", path.display(), e),
    })?;

    tracing::info!(path = %path.display(), "directory created");
    Ok(())
}

/// Copy a file or a whole directory tree. Never overwrites.
pub fn copy(from: &Path, to: &Path) -> Result<(), FsError> {
    if !from.exists() {
        return Err(FsError::NotFound {
            path: display(from),
        });
    }

    if to.exists() {
        return Err(FsError::AlreadyExists { path: display(to) });
    }

    if from.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.copy_inside = true;
        fs_extra::dir::copy(from, to, &options).map_err(|e| FsError::OperationFailed {
            reason: format!(
                "Failed to copy '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ),
        })?;
    } else {
        let options = fs_extra::file::CopyOptions::new();
        fs_extra::file::copy(from, to, &options).map_err(|e| FsError::OperationFailed {
            reason: format!(
                "Failed to copy '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ),
        })?;
    }

    tracing::info!(from = %from.display(), to = %to.display(), "copied");
    Ok(())
}

/// Rename/move a file or directory. Never overwrites.
pub fn rename(from: &Path, to: &Path) -> Result<(), FsError> {
    if !from.exists() {
        return Err(FsError::NotFound {
            path: display(from),
        });
    }

    if to.exists() {
        return Err(FsError::AlreadyExists { path: display(to) });
    }

    fs::rename(from, to).map_err(|e| FsError::OperationFailed {
        reason: format!(
            "Failed to move '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ),
    })?;

    tracing::info!(from = %from.display(), to = %to.display(), "moved");
    Ok(())
}

/// Remove a file, or a directory together with everything below it
pub fn remove(path: &Path) -> Result<Removal, FsError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FsError::NotFound {
            path: display(path),
        },
        _ => FsError::OperationFailed {
            reason: format!("Failed to read '{}': {}", path.display(), e),
        },
    })?;

    if metadata.is_dir() {
        let removed = count_entries(path)?;
        fs::remove_dir_all(path).map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to remove directory '{}': {}", path.display(), e),
        })?;

        tracing::info!(path = %path.display(), removed, "directory removed");
        Ok(Removal::Directory { removed })
    } else {
        fs::remove_file(path).map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to remove file '{}': {}", path.display(), e),
        })?;

        tracing::info!(path = %path.display(), "file removed");
        Ok(Removal::File)
    }
}

/// Count every entry below `dir` without following symlinks, the same way
/// `remove_dir_all` walks it.
fn count_entries(dir: &Path) -> Result<u64, FsError> {
    let mut count = 0;

    for entry in fs::read_dir(dir).map_err(|e| FsError::OperationFailed {
        reason: format!("Failed to read directory '{}': {}", dir.display(), e),
    })? {
        let entry = entry.map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read entry in '{}': {}", dir.display(), e),
        })?;
        count += 1;

        let file_type = entry.file_type().map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read '{}': {}", entry.path().display(), e),
        })?;
        if file_type.is_dir() {
            count += count_entries(&entry.path())?;
        }
    }

    Ok(count)
}
