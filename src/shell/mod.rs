// src/shell/mod.rs
//!
//! Shell Module
//!
//! Turns input lines into filesystem operations: tokenizing, arity checks,
//! path resolution against the cursor, dispatch and rendering.
//!

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod render;
pub mod repl;
pub mod resolver;


pub use command::{Command, CommandInvocation};
pub use config::ShellConfig;
pub use dispatcher::{dispatch, dispatch_line, Outcome};
pub use error::{ErrorKind, ShellError};
pub use repl::Repl;
pub use resolver::{Navigation, PathResolver};
