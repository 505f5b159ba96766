//! Atomic text file writes.
//!
//! Writes go to a hidden sibling temp file which is fsynced and then renamed
//! over the target, so readers see either the old content or the new one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix of the temporary file used during a write.
const TEMP_SUFFIX: &str = ".tmp";

/// A handle to a text file that is replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct AtomicTextFile {
    path: PathBuf,
}

impl AtomicTextFile {
    /// Creates a new handle. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: File content
    /// - `Ok(None)`: File doesn't exist
    /// - `Err`: Any other read failure
    pub fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replaces the file content atomically.
    ///
    /// Creates the parent directory if needed.
    pub fn write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.temp_path()?;
        let result = Self::write_and_sync(&tmp_path, content)
            .and_then(|()| fs::rename(&tmp_path, &self.path));

        if result.is_err() {
            // Best effort; the original error is what matters
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    /// Removes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: File removed
    /// - `Ok(false)`: File didn't exist
    /// - `Err`: Any other failure
    pub fn remove(&self) -> io::Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn write_and_sync(tmp_path: &Path, content: &str) -> io::Result<()> {
        let mut tmp_file = File::create(tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()
    }

    /// Gets a temporary file path for atomic writes, e.g. `.name.txt.tmp`.
    fn temp_path(&self) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name")
        })?;

        let tmp_name = format!(".{}{}", file_name.to_string_lossy(), TEMP_SUFFIX);
        Ok(self.path.with_file_name(tmp_name))
    }
}
