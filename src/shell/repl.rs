// src/shell/repl.rs
//!
//! Prompt loop over arbitrary input/output streams

use crate::shell::config::ShellConfig;
use crate::shell::dispatcher::{dispatch_line, Outcome};
use crate::shell::render;
use crate::shell::resolver::PathResolver;
use std::io::{self, BufRead, Write};

pub struct Repl<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    resolver: PathResolver,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(reader: R, writer: W, resolver: PathResolver, config: ShellConfig) -> Self {
        Self {
            reader,
            writer,
            resolver,
            config,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run until `exit`/`quit` or end of input. Command failures are
    /// rendered and never end the loop; only stream errors are returned.
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.show_banner {
            render::banner(&mut self.writer)?;
            render::help(&mut self.writer)?;
        }

        let mut buf = Vec::new();
        loop {
            write!(self.writer, "{}", self.config.prompt)?;
            self.writer.flush()?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.writer)?;
                render::outcome(&mut self.writer, &Outcome::Exit)?;
                break;
            }

            // Invalid UTF-8 is replaced rather than ending the session
            let line = String::from_utf8_lossy(&buf);
            match dispatch_line(&mut self.resolver, &line) {
                None => continue,
                Some(Ok(outcome)) => {
                    render::outcome(&mut self.writer, &outcome)?;
                    if matches!(outcome, Outcome::Exit) {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::debug!(kind = ?e.kind(), error = %e, "command failed");
                    render::error(&mut self.writer, &e)?;
                }
            }
        }

        self.writer.flush()
    }
}
