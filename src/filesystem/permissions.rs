// src/filesystem/permissions.rs
//!
//! Owner/group/other permission handling
//!
//! On Unix the full mode bits are read and replaced. Platforms without
//! POSIX permission bits only carry a read-only flag, so reads are derived
//! from it and writes degrade to toggling it with a warning.

use crate::filesystem::commands::{EntryKind, FsError};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Three permission digits for owner, group and other (read=4, write=2, execute=1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionTriad {
    pub owner: u8,
    pub group: u8,
    pub other: u8,
}

impl PermissionTriad {
    pub fn from_mode(mode: u32) -> Self {
        Self {
            owner: ((mode >> 6) & 0o7) as u8,
            group: ((mode >> 3) & 0o7) as u8,
            other: (mode & 0o7) as u8,
        }
    }

    /// Combined permission mask, e.g. `0o755`
    pub fn mode(&self) -> u32 {
        (u32::from(self.owner) << 6) | (u32::from(self.group) << 3) | u32::from(self.other)
    }

    /// Nine character form such as `rwxr-xr-x`
    pub fn symbolic(&self) -> String {
        [self.owner, self.group, self.other]
            .iter()
            .map(|digit| rwx(*digit))
            .collect()
    }
}

/// Three character `rwx` form of a single digit
pub fn rwx(digit: u8) -> String {
    let mut out = String::with_capacity(3);
    out.push(if digit & 4 != 0 { 'r' } else { '-' });
    out.push(if digit & 2 != 0 { 'w' } else { '-' });
    out.push(if digit & 1 != 0 { 'x' } else { '-' });
    out
}

impl FromStr for PermissionTriad {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s.bytes().collect();

        if digits.len() != 3 || !digits.iter().all(|b| (b'0'..=b'7').contains(b)) {
            return Err(FsError::InvalidArgument {
                reason: format!("Invalid permissions '{}': use 3-digit format (e.g., 755)", s),
            });
        }

        Ok(Self {
            owner: digits[0] - b'0',
            group: digits[1] - b'0',
            other: digits[2] - b'0',
        })
    }
}

impl fmt::Display for PermissionTriad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.owner, self.group, self.other)
    }
}

/// Result of reading permissions for `stat`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionReport {
    pub triad: PermissionTriad,
    pub kind: EntryKind,
}

/// Result of `chmod`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionChange {
    pub triad: PermissionTriad,
    /// Set when the platform could not store the requested bits exactly
    pub warning: Option<String>,
}

/// Whether this platform stores POSIX-style owner/group/other bits
pub fn supports_posix_permissions() -> bool {
    cfg!(unix)
}

pub fn read_permissions(path: &Path) -> Result<PermissionReport, FsError> {
    if !path.exists() {
        return Err(FsError::NotFound {
            path: path.to_string_lossy().to_string(),
        });
    }

    let metadata = fs::metadata(path).map_err(|e| FsError::OperationFailed {
        reason: format!("Failed to read metadata for '{}': {}", path.display(), e),
    })?;

    Ok(PermissionReport {
        triad: triad_from_permissions(&metadata.permissions()),
        kind: if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        },
    })
}

/// Replace the permissions of `path` with the triad in `perms`.
///
/// The target must exist before the triad is validated.
pub fn apply_permissions(path: &Path, perms: &str) -> Result<PermissionChange, FsError> {
    if !path.exists() {
        return Err(FsError::NotFound {
            path: path.to_string_lossy().to_string(),
        });
    }

    let triad: PermissionTriad = perms.parse()?;
    store_mode(path, triad)?;

    if supports_posix_permissions() {
        tracing::info!(path = %path.display(), mode = %triad, "permissions replaced");
        return Ok(PermissionChange {
            triad,
            warning: None,
        });
    }

    tracing::debug!(path = %path.display(), mode = %triad, "permission bits unsupported, read-only flag set");
    Ok(PermissionChange {
        triad,
        warning: Some(format!(
            "owner/group/other bits are not supported on this platform; only the read-only flag was set to {}",
            triad.owner & 2 == 0
        )),
    })
}

// ============================================================================
// Unix
// ============================================================================

#[cfg(unix)]
fn triad_from_permissions(permissions: &fs::Permissions) -> PermissionTriad {
    use std::os::unix::fs::PermissionsExt;
    PermissionTriad::from_mode(permissions.mode())
}

#[cfg(unix)]
fn store_mode(path: &Path, triad: PermissionTriad) -> Result<(), FsError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(triad.mode())).map_err(|e| {
        FsError::OperationFailed {
            reason: format!("Failed to change permissions of '{}': {}", path.display(), e),
        }
    })
}

// ============================================================================
// Platforms without POSIX bits
// ============================================================================

#[cfg(not(unix))]
fn triad_from_permissions(permissions: &fs::Permissions) -> PermissionTriad {
    if permissions.readonly() {
        PermissionTriad::from_mode(0o444)
    } else {
        PermissionTriad::from_mode(0o666)
    }
}

#[cfg(not(unix))]
fn store_mode(path: &Path, triad: PermissionTriad) -> Result<(), FsError> {
    let mut permissions = fs::metadata(path)
        .map_err(|e| FsError::OperationFailed {
            reason: format!("Failed to read metadata for '{}': {}", path.display(), e),
        })?
        .permissions();
    permissions.set_readonly(triad.owner & 2 == 0);
    fs::set_permissions(path, permissions).map_err(|e| FsError::OperationFailed {
        reason: format!("Failed to change permissions of '{}': {}", path.display(), e),
    })
}
