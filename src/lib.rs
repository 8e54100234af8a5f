pub mod filesystem;
pub mod logging;
pub mod shell;

use crate::shell::{PathResolver, Repl, ShellConfig};
use std::io;

/// Run an interactive session on stdin/stdout until `exit`, `quit` or end
/// of input.
pub fn run() {
    logging::init();

    let config = ShellConfig::default();
    let resolver = match &config.start_dir {
        Some(dir) => Ok(PathResolver::new(dir.clone())),
        None => PathResolver::from_current_dir(),
    };

    let resolver = match resolver {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let stdin = io::stdin();
    let mut repl = Repl::new(stdin.lock(), io::stdout(), resolver, config);

    if let Err(e) = repl.run() {
        tracing::error!(error = %e, "terminal stream failed");
    }
}
