// history.rs
//
// On-disk history: one entry per line, oldest first. Files we write start with
// a `#V2` header and escape `\`, `\n` and `\r` inside entries; files without
// the header are read line by line as-is.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const V2_HEADER: &str = "#V2";

/// Makes sure the history file exists without truncating it. Missing parent
/// directories are created and the file is opened again; any other failure
/// is returned.
pub fn ensure_exists(path: &Path) -> Result<()> {
    match touch(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
                debug!(dir = %parent.display(), "created history directory");
            }
            touch(path).map_err(|source| Error::CreateFile {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(Error::CreateFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn touch(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
}

/// Reads every entry in file order. Blank lines are skipped.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = content.lines().peekable();
    let escaped = lines.next_if_eq(&V2_HEADER).is_some();
    Ok(lines
        .filter(|line| !line.is_empty())
        .map(|line| if escaped { unescape(line) } else { line.to_string() })
        .collect())
}

/// Overwrites the file with `entries`.
pub fn save<'a, I>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    write_entries(path, entries).map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })
}

fn write_entries<'a, I>(path: &Path, entries: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", V2_HEADER)?;
    for entry in entries {
        writeln!(w, "{}", escape(entry))?;
    }
    w.flush()
}

fn escape(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len());
    for c in entry.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
