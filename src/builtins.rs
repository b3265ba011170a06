// builtins.rs

use std::io::{self, Write};

use crate::session::Session;

/// What the REPL should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Runs `line` if it names a builtin; any other line is only recorded in
/// history. `exit` never terminates the process itself, so the session's
/// history write-back still happens on the way out.
pub fn run<W: Write>(line: &str, session: &Session, out: &mut W) -> io::Result<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["exit"] => Ok(Flow::Exit(0)),
        ["exit", code, ..] => Ok(Flow::Exit(code.parse().unwrap_or(255))),
        ["history"] => history(session, session.len(), out).map(|()| Flow::Continue),
        ["history", n, ..] => {
            match n.parse::<usize>() {
                Ok(n) => history(session, n, out)?,
                Err(_) => print_line(out, format!("history: {}: numeric argument required", n))?,
            }
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Continue),
    }
}

/// Writes one line, treating a closed reader as success.
pub fn print_line<W: Write>(out: &mut W, line: impl AsRef<str>) -> io::Result<()> {
    match writeln!(out, "{}", line.as_ref()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Flushes `out` under the same closed-reader policy as [`print_line`].
pub fn flush_output<W: Write>(out: &mut W) -> io::Result<()> {
    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

// Numbered listing of the last `n` entries.
fn history<W: Write>(session: &Session, n: usize, out: &mut W) -> io::Result<()> {
    let total = session.len();
    for (i, entry) in session.entries().enumerate().skip(total - n.min(total)) {
        print_line(out, format!("{:>5}  {}", i + 1, entry))?;
    }
    Ok(())
}
