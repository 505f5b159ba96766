use super::{TODO_NOT_FOUND_MESSAGE, query_todo_id};
use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::TodoService;

/// Deletes a todo by id.
pub struct DeleteTodoCommand {
    todo_service: Arc<dyn TodoService>,
}

impl DeleteTodoCommand {
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }
}

impl Command for DeleteTodoCommand {
    fn name(&self) -> &str {
        "delete-todo"
    }

    fn description(&self) -> &str {
        "Remove todos"
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        let Some(todo_id) = query_todo_id(io)? else {
            return Ok(());
        };

        match self.todo_service.delete_todo_by_id(todo_id)? {
            Some(todo) => io.print(&format!("Deleted todo with title '{}'", todo.title())),
            None => io.print(TODO_NOT_FOUND_MESSAGE),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::create_service;
    use chrono::Utc;
    use todo_application::ScriptedIo;
    use todo_core::todo::Todo;
    use uuid::Uuid;

    #[test]
    fn test_deletes_existing() {
        let (service, _temp_dir) = create_service();
        let todo = Todo::new("Old plan", Utc::now(), "misc", 0);
        service.create_todo(&todo).unwrap();

        let mut io = ScriptedIo::new([todo.id().to_string()]);
        DeleteTodoCommand::new(service.clone()).execute(&mut io).unwrap();

        assert_eq!(io.output(), ["Deleted todo with title 'Old plan'"]);
        assert_eq!(service.count_todos().unwrap(), 0);
    }

    #[test]
    fn test_reports_missing() {
        let (service, _temp_dir) = create_service();
        let mut io = ScriptedIo::new([Uuid::new_v4().to_string()]);
        DeleteTodoCommand::new(service).execute(&mut io).unwrap();
        assert_eq!(io.output(), [TODO_NOT_FOUND_MESSAGE]);
    }
}
