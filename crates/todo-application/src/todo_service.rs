//! Default todo service.
//!
//! Wraps a `TodoRepository` with the operations the command layer needs.
//! Updates are always read-modify-write over the full record.

use std::cmp::Ordering;
use std::sync::Arc;
use todo_core::error::{Result, TodoError};
use todo_core::todo::{Todo, TodoRepository, TodoService, TodoStatus, Todos};
use uuid::Uuid;

/// Default `TodoService` backed by any `TodoRepository`.
pub struct DefaultTodoService {
    todo_repository: Arc<dyn TodoRepository>,
}

impl DefaultTodoService {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Fetches a todo, mapping `NotFound` to `None`.
    fn find_existing(&self, todo_id: Uuid) -> Result<Option<Todo>> {
        match self.todo_repository.find_by_id(todo_id) {
            Ok(todo) => Ok(Some(todo)),
            Err(TodoError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Compares two titles character by character, ignoring case.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl TodoService for DefaultTodoService {
    fn create_todo(&self, todo: &Todo) -> Result<()> {
        self.todo_repository.save(todo)?;
        tracing::info!("Created todo {} '{}'", todo.id(), todo.title());
        Ok(())
    }

    fn delete_todo_by_id(&self, todo_id: Uuid) -> Result<Option<Todo>> {
        let Some(todo) = self.find_existing(todo_id)? else {
            tracing::debug!("Nothing to delete for {}", todo_id);
            return Ok(None);
        };

        self.todo_repository.delete(todo_id)?;
        tracing::info!("Deleted todo {} '{}'", todo_id, todo.title());
        Ok(Some(todo))
    }

    fn update_todo_status_by_id(
        &self,
        todo_id: Uuid,
        status: TodoStatus,
    ) -> Result<Option<Todo>> {
        let Some(mut todo) = self.find_existing(todo_id)? else {
            tracing::debug!("Nothing to update for {}", todo_id);
            return Ok(None);
        };

        let previous = todo.status();
        todo.set_status(status);
        self.todo_repository.save(&todo)?;
        tracing::info!("Todo {} status {} -> {}", todo_id, previous, status);
        Ok(Some(todo))
    }

    fn get_todo_by_id(&self, todo_id: Uuid) -> Result<Todo> {
        self.todo_repository.find_by_id(todo_id)
    }

    fn get_todos(&self) -> Result<Todos> {
        Ok(self.todo_repository.find_all()?.into_iter())
    }

    fn search_todos(&self, query: &str) -> Result<Todos> {
        let query = query.to_lowercase();
        let mut matches: Vec<Todo> = self
            .get_todos()?
            .filter(|todo| todo.title().to_lowercase().contains(&query))
            .collect();

        // sort_by is stable: equal titles keep enumeration order
        matches.sort_by(|a, b| compare_ignore_case(a.title(), b.title()));
        tracing::debug!("Search '{}' matched {} todos", query, matches.len());
        Ok(matches.into_iter())
    }
}
