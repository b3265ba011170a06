//! Interactive shell whose command history lives in an XDG-compliant file
//! (`$XDG_DATA_HOME/python_history`, default `~/.local/share/python_history`).
//!
//! [`Session`] performs the startup sequence: resolve the path, create the
//! file and its directories if needed, configure the line editor, load the
//! history, and write it back once on normal exit.

pub mod builtins;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod paths;
pub mod repl;
pub mod session;

pub use config::{SessionConfig, DEFAULT_HISTORY_LEN};
pub use error::{Error, Result};
pub use session::Session;
