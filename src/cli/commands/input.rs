//! Reading the todo file off the main thread.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::debug;

use crate::error::TodoError;

/// Where the todo file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Interpret a path argument, where `-` means stdin.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read or is not UTF-8.
    pub fn read(&self) -> io::Result<String> {
        match self {
            Self::Stdin => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            },
            Self::File(path) => std::fs::read_to_string(path),
        }
    }
}

/// Input being read on a background thread.
#[derive(Debug)]
pub struct PendingInput {
    source: Source,
    rx: Receiver<io::Result<String>>,
}

impl PendingInput {
    /// Start reading `source` in the background.
    #[must_use]
    pub fn spawn(source: Source) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        let reader = source.clone();
        thread::spawn(move || {
            // The receiver only goes away if the caller stopped waiting.
            let _ = tx.send(reader.read());
        });
        Self { source, rx }
    }

    /// Wait for the reader to hand over the input.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if reading failed or the reader thread died.
    pub fn wait(self) -> Result<String, TodoError> {
        let input = self
            .rx
            .recv()
            .map_err(|_| io::Error::other("input reader exited without a result"))?
            .map_err(|e| match &self.source {
                Source::Stdin => io::Error::new(e.kind(), format!("reading stdin: {e}")),
                Source::File(path) => {
                    io::Error::new(e.kind(), format!("reading {}: {e}", path.display()))
                },
            })?;
        debug!(bytes = input.len(), source = ?self.source, "input received");
        Ok(input)
    }
}
