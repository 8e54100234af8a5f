// src/shell/config.rs

use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "explorer> ";

/// Settings for one shell session. Nothing is persisted between runs.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    /// Starting cursor; `None` means the process working directory
    pub start_dir: Option<PathBuf>,
    /// Print the banner and help text before the first prompt
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            start_dir: None,
            show_banner: true,
        }
    }
}
