mod cli;
mod commands;
mod logging;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

use cli::Args;
use repl::RustylineIo;
use todo_application::{CommandService, DefaultTodoService};
use todo_core::config::TodoConfig;
use todo_core::todo::TodoService;
use todo_infrastructure::{ConfigService, FileTodoRepository, TodoPaths};

/// Loads `config.toml` from `path` or the platform config directory.
///
/// Without a resolvable config directory the defaults are used; a config file
/// that exists but cannot be read or parsed is fatal.
fn load_config(path: Option<&Path>) -> Result<TodoConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => match ConfigService::new() {
            Ok(service) => service,
            Err(_) => return Ok(TodoConfig::default()),
        },
    };

    service
        .load()
        .with_context(|| format!("Failed to load configuration from {:?}", service.path()))
}

/// Installs file logging if it can be set up.
///
/// Logging stays off when there is nowhere to put the files; the tracker
/// itself does not depend on it.
fn start_logging(config: &TodoConfig) -> Option<WorkerGuard> {
    let log_dir = TodoPaths::log_dir(config).ok()?;
    match logging::init_tracing(&log_dir, &config.logging.level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let _log_guard = start_logging(&config);

    let working_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let storage_root =
        TodoPaths::storage_root(args.storage_dir.as_deref(), &config, &working_dir);
    tracing::info!("Starting with storage root {:?}", storage_root);

    let repository = Arc::new(FileTodoRepository::new(storage_root));
    let todo_service: Arc<dyn TodoService> = Arc::new(DefaultTodoService::new(repository));

    let mut commands = CommandService::new();
    commands::register_all(&mut commands, todo_service);

    let mut io = RustylineIo::new(&commands).context("Failed to start line editor")?;
    repl::run(&commands, &mut io).context("Input failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nroot = \"/srv/todos\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.storage.root, Some(std::path::PathBuf::from("/srv/todos")));
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(Some(temp_dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn test_unusable_log_dir_disables_logging() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let mut config = TodoConfig::default();
        config.logging.directory = Some(blocker.join("logs"));

        assert!(start_logging(&config).is_none());
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
