//! Todo repository trait.
//!
//! Defines the interface for todo persistence operations.

use super::model::Todo;
use crate::error::Result;
use uuid::Uuid;

/// An abstract repository for managing todo persistence.
///
/// Every operation is synchronous and runs to completion before returning.
/// Implementations are expected to keep one record per todo, keyed by its id.
pub trait TodoRepository: Send + Sync {
    /// Finds a todo by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Todo)`: Todo found
    /// - `Err(TodoError::NotFound)`: No record exists for `todo_id`
    /// - `Err(TodoError::MalformedRecord)`: The record exists but cannot be decoded
    /// - `Err(TodoError::Io)`: Any other read failure
    fn find_by_id(&self, todo_id: Uuid) -> Result<Todo>;

    /// Lists every stored todo.
    ///
    /// Enumeration is best-effort: an unreadable or missing storage location
    /// yields an empty list. The order is unspecified.
    fn find_all(&self) -> Result<Vec<Todo>>;

    /// Saves a todo, replacing any previous record with the same id.
    ///
    /// The full record is always written.
    fn save(&self, todo: &Todo) -> Result<()>;

    /// Deletes a todo from storage.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Todo deleted successfully (or didn't exist)
    /// - `Err(_)`: Error occurred during deletion
    fn delete(&self, todo_id: Uuid) -> Result<()>;
}
