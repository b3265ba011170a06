// config.rs

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::paths;

/// Oldest entries beyond this count are discarded.
pub const DEFAULT_HISTORY_LEN: usize = 5000;

pub const DEFAULT_PROMPT: &str = "$ ";

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub history_path: PathBuf,
    pub history_len: usize,
    /// Collapse an entry identical to the one before it.
    pub ignore_dups: bool,
    pub prompt: String,
}

impl SessionConfig {
    pub fn new(history_path: impl Into<PathBuf>) -> Self {
        Self {
            history_path: history_path.into(),
            history_len: DEFAULT_HISTORY_LEN,
            ignore_dups: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Reads `XDG_DATA_HOME` and the user's home directory from the process.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var_os(paths::DATA_HOME_VAR), dirs::home_dir())
    }

    pub fn resolve(xdg_data_home: Option<OsString>, home: Option<PathBuf>) -> Result<Self> {
        let base = paths::data_home(xdg_data_home, home)?;
        let history_path = paths::history_path(&base);
        debug!(path = %history_path.display(), "resolved history file");
        Ok(Self::new(history_path))
    }

    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn with_ignore_dups(mut self, yes: bool) -> Self {
        self.ignore_dups = yes;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
