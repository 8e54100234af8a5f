// src/filesystem/mod.rs
//!
//! Filesystem Module
//!
//! The single collaborator every shell command ends up calling. Each
//! function performs one operating-system step on an absolute path and
//! reports failure through `FsError`.

pub mod commands;
pub mod permissions;
pub mod search;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use permissions::{PermissionChange, PermissionReport, PermissionTriad};
pub use search::SearchReport;
