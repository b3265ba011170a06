// repl.rs

use std::io;

use rustyline::error::ReadlineError;
use tracing::warn;

use crate::builtins::{self, Flow};
use crate::error::Result;
use crate::session::Session;

/// Reads lines until `exit` or end of input, returning the exit status.
pub fn run(session: &mut Session) -> Result<i32> {
    loop {
        let line = match session.readline() {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(0),
            Err(err) => return Err(err.into()),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        session.add_entry(trimmed)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match builtins::run(trimmed, session, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(code)) => return Ok(code),
            Err(err) => warn!(error = %err, "command output failed"),
        }
        if let Err(err) = builtins::flush_output(&mut out) {
            warn!(error = %err, "flushing stdout failed");
        }
    }
}
