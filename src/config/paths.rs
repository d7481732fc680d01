//! Path resolution for todofmt configuration.
//!
//! Configuration lives in `~/.todofmt/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TodoError;

/// Paths to todofmt configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.todofmt/`
    pub root: PathBuf,
    /// Config file: `~/.todofmt/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TodoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".todofmt")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".todofmt"))
        })
    }
}
