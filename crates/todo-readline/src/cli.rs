//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Personal todo tracker with file-backed storage.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
pub struct Args {
    /// Directory holding the todo records
    ///
    /// Falls back to $TODO_STORAGE_DIR, then the config, then the working directory.
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
