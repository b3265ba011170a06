// session.rs

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use rustyline::history::{History, MemHistory};
use rustyline::{Cmd, CompletionType, Config, Editor, KeyCode, KeyEvent, Modifiers};
use tracing::{debug, warn};

use crate::completion::ShellHelper;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::history;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// An interactive session: the configured line editor, its in-memory history,
/// and the pending write-back of that history to disk.
///
/// History is written back exactly once, by [`Session::close`] or, failing
/// that, when the session is dropped. Nothing is written while unwinding from
/// a panic, and a killed process never gets that far.
pub struct Session {
    editor: Editor<ShellHelper, MemHistory>,
    history_path: PathBuf,
    prompt: String,
    pending_write: bool,
}

impl Session {
    /// Opens the process-wide session. Only the first successful call in a
    /// process gets a session; later calls fail without touching anything.
    pub fn install(config: SessionConfig) -> Result<Self> {
        if INSTALLED.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyInitialized);
        }
        Self::open(config).inspect_err(|_| INSTALLED.store(false, Ordering::SeqCst))
    }

    /// Opens an isolated session, independent of [`Session::install`].
    pub fn open(config: SessionConfig) -> Result<Self> {
        history::ensure_exists(&config.history_path)?;

        let editor_config = Config::builder()
            .completion_type(CompletionType::List)
            .build();
        let mut entries = MemHistory::new();
        entries.set_max_len(config.history_len)?;
        entries.ignore_dups(config.ignore_dups)?;
        let mut editor = Editor::with_history(editor_config, entries)?;
        editor.set_helper(Some(ShellHelper::new()));
        editor.bind_sequence(KeyEvent(KeyCode::Tab, Modifiers::NONE), Cmd::Complete);

        for entry in history::load(&config.history_path)? {
            editor.add_history_entry(entry)?;
        }
        debug!(
            path = %config.history_path.display(),
            entries = editor.history().len(),
            "loaded history"
        );

        Ok(Self {
            editor,
            history_path: config.history_path,
            prompt: config.prompt,
            pending_write: true,
        })
    }

    pub fn readline(&mut self) -> rustyline::Result<String> {
        self.editor.readline(&self.prompt)
    }

    /// Appends an entry, dropping the oldest one once the history is full.
    pub fn add_entry(&mut self, line: &str) -> Result<bool> {
        Ok(self.editor.add_history_entry(line)?)
    }

    /// History entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &String> + '_ {
        self.editor.history().into_iter()
    }

    pub fn len(&self) -> usize {
        self.editor.history().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Writes the history back, overwriting the file.
    pub fn close(mut self) -> Result<()> {
        self.write_back()
    }

    fn write_back(&mut self) -> Result<()> {
        if !self.pending_write {
            return Ok(());
        }
        self.pending_write = false;
        history::save(&self.history_path, self.editor.history())?;
        debug!(path = %self.history_path.display(), entries = self.len(), "saved history");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Err(err) = self.write_back() {
            warn!(error = %err, "history was not saved");
        }
    }
}
