// src/shell/render.rs
//!
//! All user-visible text
//!
//! Every dispatched line produces exactly one block: a success message, an
//! informational notice, or a single `Error:` line.

use crate::filesystem::permissions::rwx;
use crate::filesystem::{EntryKind, Removal};
use crate::shell::command::{Section, COMMANDS};
use crate::shell::dispatcher::Outcome;
use crate::shell::error::ShellError;
use crate::shell::resolver::Navigation;
use std::io::{self, Write};

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 50;

fn rule(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "FOLDER",
        EntryKind::File => "FILE",
    }
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== File Explorer ===")?;
    writeln!(out, "Type 'help' for commands")?;
    writeln!(out)
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== FILE EXPLORER COMMANDS ===")?;
    writeln!(out)?;

    for section in Section::ALL {
        writeln!(out, "{}:", section.title())?;
        for entry in COMMANDS
            .iter()
            .filter(|entry| entry.section == section && !entry.synopsis.is_empty())
        {
            writeln!(out, "  {:<22}- {}", entry.synopsis, entry.summary)?;
            if section == Section::Permissions {
                for example in entry.examples {
                    writeln!(out, "  Example: {}", example)?;
                }
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Listing { dir, entries } => {
            writeln!(out)?;
            writeln!(out, "=== Contents of: {} ===", dir.display())?;
            rule(out, WIDE_RULE)?;
            writeln!(out, "{:<40}{:<15}{}", "NAME", "TYPE", "SIZE")?;
            rule(out, WIDE_RULE)?;
            for entry in entries {
                let size = entry
                    .size
                    .map(|bytes| format!("{} B", bytes))
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    out,
                    "{:<40}{:<15}{}",
                    entry.name,
                    kind_label(entry.kind),
                    size
                )?;
            }
            rule(out, WIDE_RULE)
        }
        Outcome::Navigated(Navigation::Changed(path)) => {
            writeln!(out, "Changed to: {}", path.display())
        }
        Outcome::Navigated(Navigation::AlreadyAtRoot) => {
            writeln!(out, "Already at root directory")
        }
        Outcome::WorkingDir(path) => writeln!(out, "{}", path.display()),
        Outcome::FileCreated(path) => writeln!(out, "File created: {}", path.display()),
        Outcome::DirCreated(path) => writeln!(out, "Directory created: {}", path.display()),
        Outcome::Copied { from, to } => {
            writeln!(out, "Copied: {} -> {}", from.display(), to.display())
        }
        Outcome::Moved { from, to } => {
            writeln!(out, "Moved: {} -> {}", from.display(), to.display())
        }
        Outcome::Removed { path, removal } => match removal {
            Removal::File => writeln!(out, "File deleted: {}", path.display()),
            Removal::Directory { removed } => writeln!(
                out,
                "Directory deleted: {} ({} items removed)",
                path.display(),
                removed
            ),
        },
        Outcome::Found { pattern, report } => {
            writeln!(out)?;
            writeln!(out, "=== Search results for pattern: '{}' ===", pattern)?;
            rule(out, WIDE_RULE)?;
            for path in &report.matches {
                writeln!(out, "{}", path.display())?;
            }
            for skipped in &report.skipped {
                writeln!(out, "Warning: {}", skipped)?;
            }
            rule(out, WIDE_RULE)?;
            writeln!(out, "Found: {} match(es)", report.match_count())?;
            writeln!(out)
        }
        Outcome::Permissions { path, report } => {
            let triad = report.triad;
            writeln!(out)?;
            writeln!(out, "Permissions for: {}", path.display())?;
            rule(out, NARROW_RULE)?;
            writeln!(out, "Mode:         {}", triad.symbolic())?;
            writeln!(out, "Owner (User): {}", rwx(triad.owner))?;
            writeln!(out, "Group:        {}", rwx(triad.group))?;
            writeln!(out, "Other:        {}", rwx(triad.other))?;
            rule(out, NARROW_RULE)?;
            match report.kind {
                EntryKind::Directory => writeln!(out, "Type: Directory")?,
                EntryKind::File => writeln!(out, "Type: File")?,
            }
            writeln!(out)
        }
        Outcome::PermissionsChanged(change) => match &change.warning {
            None => {
                writeln!(out, "Permissions changed to: {}", change.triad)?;
                writeln!(out, "Command completed successfully!")?;
                writeln!(out)
            }
            Some(warning) => {
                writeln!(out, "Warning: {}", warning)?;
                writeln!(
                    out,
                    "Note: this platform uses access control lists instead of Unix permissions."
                )?;
                writeln!(out, "Permissions changed to: {} (conceptually)", change.triad)?;
                writeln!(out)
            }
        },
        Outcome::Help => help(out),
        Outcome::Exit => writeln!(out, "Goodbye!"),
    }
}

pub fn error(out: &mut impl Write, error: &ShellError) -> io::Result<()> {
    match error {
        ShellError::MissingArguments { examples, .. } => {
            writeln!(out, "{}", error)?;
            for example in examples.iter() {
                writeln!(out, "Example: {}", example)?;
            }
            Ok(())
        }
        ShellError::UnknownCommand { .. } => writeln!(out, "{}", error),
        ShellError::Fs(e) => writeln!(out, "Error: {}", e),
    }
}
