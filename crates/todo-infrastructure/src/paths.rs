//! Path management for todo configuration, logs and records.
//!
//! ```text
//! ~/.config/todo/              # Config directory (platform dependent)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── todo.log.YYYY-MM-DD
//!
//! <storage root>/              # Todo records, the working directory by default
//! └── <uuid>.txt
//! ```

use std::path::{Path, PathBuf};
use todo_core::config::TodoConfig;
use todo_core::error::{Result, TodoError};

/// Name of the application directory under the platform config directory.
pub const APP_DIR_NAME: &str = "todo";

/// Environment variable that overrides the storage root.
pub const STORAGE_DIR_ENV: &str = "TODO_STORAGE_DIR";

/// Path resolution for todo.
pub struct TodoPaths;

impl TodoPaths {
    /// Returns the todo configuration directory (e.g. `~/.config/todo/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| TodoError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory for rolling log files.
    pub fn log_dir(config: &TodoConfig) -> Result<PathBuf> {
        match &config.logging.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("logs")),
        }
    }

    /// Resolves the directory that holds todo records.
    ///
    /// Precedence: `explicit` (command line) → `TODO_STORAGE_DIR` →
    /// `storage.root` from the config → `working_dir`.
    pub fn storage_root(
        explicit: Option<&Path>,
        config: &TodoConfig,
        working_dir: &Path,
    ) -> PathBuf {
        Self::storage_root_with_env(
            explicit,
            std::env::var_os(STORAGE_DIR_ENV).map(PathBuf::from),
            config,
            working_dir,
        )
    }

    fn storage_root_with_env(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        config: &TodoConfig,
        working_dir: &Path,
    ) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| config.storage.root.clone())
            .unwrap_or_else(|| working_dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_root(root: &str) -> TodoConfig {
        let mut config = TodoConfig::default();
        config.storage.root = Some(PathBuf::from(root));
        config
    }

    #[test]
    fn test_storage_root_defaults_to_working_dir() {
        let root = TodoPaths::storage_root_with_env(
            None,
            None,
            &TodoConfig::default(),
            Path::new("/work"),
        );
        assert_eq!(root, PathBuf::from("/work"));
    }

    #[test]
    fn test_storage_root_precedence() {
        let config = config_with_root("/from/config");
        let work = Path::new("/work");

        assert_eq!(
            TodoPaths::storage_root_with_env(None, None, &config, work),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            TodoPaths::storage_root_with_env(
                None,
                Some(PathBuf::from("/from/env")),
                &config,
                work
            ),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            TodoPaths::storage_root_with_env(
                Some(Path::new("/from/flag")),
                Some(PathBuf::from("/from/env")),
                &config,
                work
            ),
            PathBuf::from("/from/flag")
        );
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = config_with_root("/from/config");
        assert_eq!(
            TodoPaths::storage_root_with_env(None, Some(PathBuf::new()), &config, Path::new("/w")),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_log_dir_from_config() {
        let mut config = TodoConfig::default();
        config.logging.directory = Some(PathBuf::from("/var/log/todo"));
        assert_eq!(TodoPaths::log_dir(&config).unwrap(), PathBuf::from("/var/log/todo"));
    }
}
