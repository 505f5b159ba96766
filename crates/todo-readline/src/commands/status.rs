use super::{TODO_NOT_FOUND_MESSAGE, query_todo_id};
use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::{TodoService, TodoStatus};

/// Moves a todo to a fixed status.
pub struct SetStatusCommand {
    name: &'static str,
    description: &'static str,
    status: TodoStatus,
    todo_service: Arc<dyn TodoService>,
}

impl SetStatusCommand {
    /// `complete-todo`: marks a todo as completed.
    pub fn complete(todo_service: Arc<dyn TodoService>) -> Self {
        Self {
            name: "complete-todo",
            description: "Mark a todo as completed",
            status: TodoStatus::Completed,
            todo_service,
        }
    }

    /// `start-todo`: marks a todo as in-progress.
    pub fn start(todo_service: Arc<dyn TodoService>) -> Self {
        Self {
            name: "start-todo",
            description: "Mark a todo as in-progress",
            status: TodoStatus::InProgress,
            todo_service,
        }
    }
}

impl Command for SetStatusCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        let Some(todo_id) = query_todo_id(io)? else {
            return Ok(());
        };

        match self
            .todo_service
            .update_todo_status_by_id(todo_id, self.status)?
        {
            Some(todo) => io.print(&format!(
                "Todo '{}' is now {}.",
                todo.title(),
                todo.status().display_name()
            )),
            None => io.print(TODO_NOT_FOUND_MESSAGE),
        }
        Ok(())
    }
}
