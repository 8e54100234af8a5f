// src/shell/dispatcher.rs
//!
//! Routes validated commands to the filesystem
//!
//! Path arguments are resolved against the cursor exactly once, at the
//! start of each handler, before any filesystem call is made.

use crate::filesystem::{
    self, permissions, search, DirEntry, PermissionChange, PermissionReport, Removal, SearchReport,
};
use crate::shell::command::{Command, CommandInvocation};
use crate::shell::error::ShellError;
use crate::shell::resolver::{Navigation, PathResolver};
use std::path::PathBuf;

/// Successful result of one command, ready for rendering
#[derive(Debug)]
pub enum Outcome {
    Listing {
        dir: PathBuf,
        entries: Vec<DirEntry>,
    },
    Navigated(Navigation),
    WorkingDir(PathBuf),
    FileCreated(PathBuf),
    DirCreated(PathBuf),
    Copied {
        from: PathBuf,
        to: PathBuf,
    },
    Moved {
        from: PathBuf,
        to: PathBuf,
    },
    Removed {
        path: PathBuf,
        removal: Removal,
    },
    Found {
        pattern: String,
        report: SearchReport,
    },
    Permissions {
        path: PathBuf,
        report: PermissionReport,
    },
    PermissionsChanged(PermissionChange),
    Help,
    Exit,
}

/// Parse and run a single input line. Blank lines yield `None`.
pub fn dispatch_line(
    resolver: &mut PathResolver,
    line: &str,
) -> Option<Result<Outcome, ShellError>> {
    let invocation = CommandInvocation::parse(line)?;
    tracing::debug!(keyword = %invocation.keyword, args = ?invocation.args, "dispatching");

    Some(Command::try_from(invocation).and_then(|command| dispatch(resolver, command)))
}

pub fn dispatch(resolver: &mut PathResolver, command: Command) -> Result<Outcome, ShellError> {
    let outcome = match command {
        Command::List => {
            let dir = resolver.current().to_path_buf();
            let entries = filesystem::read_dir(&dir)?;
            Outcome::Listing { dir, entries }
        }
        Command::ChangeDir { target } => {
            let path = resolver.change_directory(&target)?.to_path_buf();
            Outcome::Navigated(Navigation::Changed(path))
        }
        Command::Parent => Outcome::Navigated(resolver.go_to_parent()),
        Command::PrintWorkingDir => Outcome::WorkingDir(resolver.current().to_path_buf()),
        Command::Touch { path } => {
            let path = resolver.resolve(&path);
            filesystem::create_file(&path)?;
            Outcome::FileCreated(path)
        }
        Command::MakeDir { path } => {
            let path = resolver.resolve(&path);
            filesystem::create_dir(&path)?;
            Outcome::DirCreated(path)
        }
        Command::Copy { from, to } => {
            let (from, to) = (resolver.resolve(&from), resolver.resolve(&to));
            filesystem::copy(&from, &to)?;
            Outcome::Copied { from, to }
        }
        Command::Move { from, to } => {
            let (from, to) = (resolver.resolve(&from), resolver.resolve(&to));
            filesystem::rename(&from, &to)?;
            Outcome::Moved { from, to }
        }
        Command::Remove { path } => {
            let path = resolver.resolve(&path);
            let removal = filesystem::remove(&path)?;
            Outcome::Removed { path, removal }
        }
        Command::Find { pattern } => {
            let report = search::find(resolver.current(), &pattern)?;
            Outcome::Found { pattern, report }
        }
        Command::Stat { path } => {
            let path = resolver.resolve(&path);
            let report = permissions::read_permissions(&path)?;
            Outcome::Permissions { path, report }
        }
        Command::Chmod { path, perms } => {
            let path = resolver.resolve(&path);
            Outcome::PermissionsChanged(permissions::apply_permissions(&path, &perms)?)
        }
        Command::Help => Outcome::Help,
        Command::Exit => Outcome::Exit,
    };

    Ok(outcome)
}
