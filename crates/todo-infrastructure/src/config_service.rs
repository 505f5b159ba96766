//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`.

use crate::paths::TodoPaths;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use todo_core::config::TodoConfig;
use todo_core::error::{Result, TodoError};

/// Configuration service that reads `TodoConfig` from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the default config path (`~/.config/todo/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TodoPaths::config_file()?))
    }

    /// Creates a service for a custom config path (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the default configuration. A file that exists but
    /// is not valid TOML for `TodoConfig` is an error.
    pub fn load(&self) -> Result<TodoConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}, using defaults", self.path);
                return Ok(TodoConfig::default());
            }
            Err(e) => {
                return Err(TodoError::config(format!(
                    "Failed to read {:?}: {}",
                    self.path, e
                )));
            }
        };

        let config: TodoConfig = toml::from_str(&content)
            .map_err(|e| TodoError::config(format!("Failed to parse {:?}: {}", self.path, e)))?;
        Ok(config)
    }
}
