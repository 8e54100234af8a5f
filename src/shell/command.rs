// src/shell/command.rs
//!
//! Input parsing and the command table
//!
//! A line is split on whitespace: the first token is the keyword, the rest
//! are positional arguments. There is no quoting, so an argument can never
//! contain a space. Keywords are case-sensitive and must match exactly.

use crate::shell::error::ShellError;

/// Groups used to lay out the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navigation,
    FileOperations,
    Search,
    Permissions,
    Other,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Navigation,
        Section::FileOperations,
        Section::Search,
        Section::Permissions,
        Section::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Navigation => "Navigation",
            Section::FileOperations => "File/Directory Operations",
            Section::Search => "Search",
            Section::Permissions => "Permissions",
            Section::Other => "Other",
        }
    }
}

/// One row of the command table
#[derive(Debug)]
pub struct CommandEntry {
    pub keyword: &'static str,
    pub arity: usize,
    pub usage: &'static str,
    pub examples: &'static [&'static str],
    /// Left column of the help text
    pub synopsis: &'static str,
    pub summary: &'static str,
    pub section: Section,
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        keyword: "ls",
        arity: 0,
        usage: "ls",
        examples: &[],
        synopsis: "ls",
        summary: "List files in current directory",
        section: Section::Navigation,
    },
    CommandEntry {
        keyword: "cd",
        arity: 1,
        usage: "cd <directory>",
        examples: &[],
        synopsis: "cd <dir>",
        summary: "Change to directory (cd .. goes to the parent)",
        section: Section::Navigation,
    },
    CommandEntry {
        keyword: "pwd",
        arity: 0,
        usage: "pwd",
        examples: &[],
        synopsis: "pwd",
        summary: "Print working directory",
        section: Section::Navigation,
    },
    CommandEntry {
        keyword: "touch",
        arity: 1,
        usage: "touch <filename>",
        examples: &[],
        synopsis: "touch <file>",
        summary: "Create empty file",
        section: Section::FileOperations,
    },
    CommandEntry {
        keyword: "mkdir",
        arity: 1,
        usage: "mkdir <dirname>",
        examples: &[],
        synopsis: "mkdir <dir>",
        summary: "Create directory",
        section: Section::FileOperations,
    },
    CommandEntry {
        keyword: "cp",
        arity: 2,
        usage: "cp <source> <destination>",
        examples: &[],
        synopsis: "cp <src> <dst>",
        summary: "Copy file or directory",
        section: Section::FileOperations,
    },
    CommandEntry {
        keyword: "mv",
        arity: 2,
        usage: "mv <source> <destination>",
        examples: &[],
        synopsis: "mv <src> <dst>",
        summary: "Move or rename file",
        section: Section::FileOperations,
    },
    CommandEntry {
        keyword: "rm",
        arity: 1,
        usage: "rm <path>",
        examples: &[],
        synopsis: "rm <path>",
        summary: "Delete file or directory",
        section: Section::FileOperations,
    },
    CommandEntry {
        keyword: "find",
        arity: 1,
        usage: "find <pattern>",
        examples: &["find \\.txt", "find test"],
        synopsis: "find <pattern>",
        summary: "Search files (regex pattern, case-insensitive)",
        section: Section::Search,
    },
    CommandEntry {
        keyword: "stat",
        arity: 1,
        usage: "stat <file>",
        examples: &[],
        synopsis: "stat <file>",
        summary: "Show file permissions",
        section: Section::Permissions,
    },
    CommandEntry {
        keyword: "chmod",
        arity: 2,
        usage: "chmod <file> <permissions>",
        examples: &["chmod file.txt 755", "chmod file.txt 644"],
        synopsis: "chmod <file> <perms>",
        summary: "Change permissions (3-digit octal)",
        section: Section::Permissions,
    },
    CommandEntry {
        keyword: "help",
        arity: 0,
        usage: "help",
        examples: &[],
        synopsis: "help",
        summary: "Show this help menu",
        section: Section::Other,
    },
    CommandEntry {
        keyword: "exit",
        arity: 0,
        usage: "exit",
        examples: &[],
        synopsis: "exit | quit",
        summary: "Exit the program",
        section: Section::Other,
    },
    CommandEntry {
        keyword: "quit",
        arity: 0,
        usage: "quit",
        examples: &[],
        synopsis: "",
        summary: "",
        section: Section::Other,
    },
];

pub fn lookup(keyword: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.keyword == keyword)
}

/// A tokenized input line, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub keyword: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Split a line into keyword and arguments. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?.to_string();
        let args = tokens.map(str::to_string).collect();
        Some(Self { keyword, args })
    }
}

/// A validated command with its positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    ChangeDir { target: String },
    Parent,
    PrintWorkingDir,
    Touch { path: String },
    MakeDir { path: String },
    Copy { from: String, to: String },
    Move { from: String, to: String },
    Remove { path: String },
    Find { pattern: String },
    Stat { path: String },
    Chmod { path: String, perms: String },
    Help,
    Exit,
}

impl TryFrom<CommandInvocation> for Command {
    type Error = ShellError;

    /// Checks arity against the command table; surplus arguments are ignored
    fn try_from(invocation: CommandInvocation) -> Result<Self, Self::Error> {
        let entry = lookup(&invocation.keyword).ok_or_else(|| ShellError::UnknownCommand {
            name: invocation.keyword.clone(),
        })?;

        if invocation.args.len() < entry.arity {
            return Err(ShellError::MissingArguments {
                usage: entry.usage,
                examples: entry.examples,
            });
        }

        let mut args = invocation.args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match entry.keyword {
            "ls" => Command::List,
            "cd" => {
                let target = next();
                if target == ".." {
                    Command::Parent
                } else {
                    Command::ChangeDir { target }
                }
            }
            "pwd" => Command::PrintWorkingDir,
            "touch" => Command::Touch { path: next() },
            "mkdir" => Command::MakeDir { path: next() },
            "cp" => Command::Copy {
                from: next(),
                to: next(),
            },
            "mv" => Command::Move {
                from: next(),
                to: next(),
            },
            "rm" => Command::Remove { path: next() },
            "find" => Command::Find { pattern: next() },
            "stat" => Command::Stat { path: next() },
            "chmod" => Command::Chmod {
                path: next(),
                perms: next(),
            },
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(ShellError::UnknownCommand {
                    name: other.to_string(),
                })
            }
        };

        Ok(command)
    }
}
