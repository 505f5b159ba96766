//! Todo service trait.
//!
//! The service is the only caller of the repository; command handlers talk to
//! the service exclusively.

use super::model::{Todo, TodoStatus};
use crate::error::Result;
use uuid::Uuid;

/// A finite, non-restartable sequence of todos.
///
/// The whole set is read before the sequence is handed out, even though the
/// caller consumes it lazily.
pub type Todos = std::vec::IntoIter<Todo>;

/// Business operations on todos.
pub trait TodoService: Send + Sync {
    /// Persists a new todo.
    fn create_todo(&self, todo: &Todo) -> Result<()>;

    /// Deletes a todo and returns what was deleted.
    ///
    /// Returns `Ok(None)` when no todo has that id.
    fn delete_todo_by_id(&self, todo_id: Uuid) -> Result<Option<Todo>>;

    /// Sets the status of a todo and persists the whole record.
    ///
    /// Any status may be set regardless of the current one. Returns `Ok(None)`
    /// when no todo has that id.
    fn update_todo_status_by_id(&self, todo_id: Uuid, status: TodoStatus)
    -> Result<Option<Todo>>;

    /// Fetches a single todo. Propagates `TodoError::NotFound`.
    fn get_todo_by_id(&self, todo_id: Uuid) -> Result<Todo>;

    /// Returns every todo in storage order.
    fn get_todos(&self) -> Result<Todos>;

    /// Returns todos whose title contains `query`, ignoring case, sorted by
    /// title ignoring case.
    fn search_todos(&self, query: &str) -> Result<Todos>;

    /// Counts stored todos.
    fn count_todos(&self) -> Result<usize> {
        Ok(self.get_todos()?.len())
    }
}
