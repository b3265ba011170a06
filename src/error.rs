// error.rs

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Everything that can go wrong while setting up or tearing down a session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not determine the home directory")]
    NoHomeDirectory,

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create history file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read history file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write history file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line editor: {0}")]
    Editor(#[from] ReadlineError),

    /// The interactive session was already installed in this process.
    #[error("interactive session already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;
