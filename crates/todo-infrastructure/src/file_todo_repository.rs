//! File-per-record TodoRepository implementation

use crate::record;
use crate::storage::AtomicTextFile;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use todo_core::error::{Result, TodoError};
use todo_core::todo::{Todo, TodoRepository};
use uuid::Uuid;

/// Extension of every record file.
pub const EXTENSION: &str = "txt";

/// A repository that keeps each todo in its own text file.
///
/// Directory structure:
/// ```text
/// root/
/// ├── 550e8400-e29b-41d4-a716-446655440000.txt
/// └── 6ba7b810-9dad-11d1-80b4-00c04fd430c8.txt
/// ```
///
/// The root is not owned exclusively. Any file in it named `<uuid>.txt` is
/// treated as a todo, and every other entry is ignored.
#[derive(Debug, Clone)]
pub struct FileTodoRepository {
    root: PathBuf,
}

impl FileTodoRepository {
    /// Creates a repository rooted at `root`. The directory does not need to
    /// exist yet; it is created on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the record file for `todo_id`.
    pub fn record_path(&self, todo_id: Uuid) -> PathBuf {
        self.root.join(format!("{}.{}", todo_id, EXTENSION))
    }

    /// Extracts the id from a record file name, or `None` if the name is not
    /// exactly what `record_path` produces (lowercase hyphenated `<uuid>.txt`).
    fn parse_record_name(file_name: &OsStr) -> Option<Uuid> {
        let name = file_name.to_str()?;
        let stem = name.strip_suffix(EXTENSION)?.strip_suffix('.')?;
        let todo_id = Uuid::try_parse(stem).ok()?;
        (todo_id.hyphenated().to_string() == stem).then_some(todo_id)
    }

    /// Reads and decodes one record. `Ok(None)` if the file does not exist.
    fn read_record(&self, todo_id: Uuid, path: &Path) -> Result<Option<Todo>> {
        let body = AtomicTextFile::new(path).read().map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => TodoError::malformed(todo_id, "not valid UTF-8"),
            _ => TodoError::io(format!("Failed to read {:?}: {}", path, e)),
        })?;

        match body {
            Some(body) => {
                tracing::debug!("Read todo record: {:?}", path);
                record::decode(todo_id, &body).map(Some)
            }
            None => Ok(None),
        }
    }
}

impl TodoRepository for FileTodoRepository {
    fn find_by_id(&self, todo_id: Uuid) -> Result<Todo> {
        let path = self.record_path(todo_id);
        self.read_record(todo_id, &path)?
            .ok_or_else(|| TodoError::not_found(todo_id))
    }

    fn find_all(&self) -> Result<Vec<Todo>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot enumerate {:?}, treating as empty: {}", self.root, e);
                return Ok(Vec::new());
            }
        };

        let mut todos = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", self.root, e);
                    continue;
                }
            };

            let Some(todo_id) = Self::parse_record_name(&entry.file_name()) else {
                continue;
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match self.read_record(todo_id, &path)? {
                Some(todo) => todos.push(todo),
                None => tracing::warn!("Todo record vanished during enumeration: {:?}", path),
            }
        }

        tracing::debug!("Loaded {} todo records from {:?}", todos.len(), self.root);
        Ok(todos)
    }

    fn save(&self, todo: &Todo) -> Result<()> {
        let file = AtomicTextFile::new(self.record_path(todo.id()));
        file.write(&record::encode(todo))
            .map_err(|e| TodoError::io(format!("Failed to save todo {}: {}", todo.id(), e)))?;
        tracing::debug!("Wrote todo record: {:?}", file.path());
        Ok(())
    }

    fn delete(&self, todo_id: Uuid) -> Result<()> {
        let file = AtomicTextFile::new(self.record_path(todo_id));
        let removed = file
            .remove()
            .map_err(|e| TodoError::io(format!("Failed to delete todo {}: {}", todo_id, e)))?;
        if removed {
            tracing::debug!("Removed todo record: {:?}", file.path());
        }
        Ok(())
    }
}
