// paths.rs

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the user data directory.
pub const DATA_HOME_VAR: &str = "XDG_DATA_HOME";

/// Used when `XDG_DATA_HOME` is unset or empty.
pub const DEFAULT_DATA_HOME: &str = "~/.local/share";

/// Flat file directly under the data directory, not namespaced per application.
pub const HISTORY_FILE_NAME: &str = "python_history";

/// Picks the base data directory from the value of `XDG_DATA_HOME` and the
/// user's home directory. An empty variable counts as unset.
pub fn data_home(xdg_data_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    match xdg_data_home.filter(|value| !value.is_empty()) {
        Some(value) => Ok(normalize(Path::new(&value))),
        None => expand_tilde(DEFAULT_DATA_HOME, home),
    }
}

pub fn history_path(data_home: &Path) -> PathBuf {
    data_home.join(HISTORY_FILE_NAME)
}

/// Expands a leading `~` or `~/`. Anything else is returned untouched.
pub fn expand_tilde(path: &str, home: Option<PathBuf>) -> Result<PathBuf> {
    if path == "~" {
        return home.ok_or(Error::NoHomeDirectory);
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home.ok_or(Error::NoHomeDirectory)?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

// Lexical only: drops `.` components and doubled separators, keeps `..`.
fn normalize(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
