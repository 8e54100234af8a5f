// src/shell/error.rs

use crate::filesystem::FsError;
use thiserror::Error;

/// Failure categories shown to the user, independent of message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    NotADirectory,
    InvalidArgument,
    OperationFailed,
    PermissionSkipped,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Usage: {usage}")]
    MissingArguments {
        usage: &'static str,
        examples: &'static [&'static str],
    },

    #[error("Unknown command: '{name}'. Type 'help' for available commands.")]
    UnknownCommand { name: String },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::MissingArguments { .. } | ShellError::UnknownCommand { .. } => {
                ErrorKind::InvalidArgument
            }
            ShellError::Fs(e) => match e {
                FsError::NotFound { .. } => ErrorKind::NotFound,
                FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
                FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
                FsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
                FsError::OperationFailed { .. } => ErrorKind::OperationFailed,
                FsError::PermissionSkipped { .. } => ErrorKind::PermissionSkipped,
            },
        }
    }
}
