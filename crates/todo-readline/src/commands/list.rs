use super::print_todo;
use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::TodoService;

/// Prints every stored todo.
pub struct ListTodosCommand {
    todo_service: Arc<dyn TodoService>,
}

impl ListTodosCommand {
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }
}

impl Command for ListTodosCommand {
    fn name(&self) -> &str {
        "list-todos"
    }

    fn description(&self) -> &str {
        "List all created todos"
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        let todos = self.todo_service.get_todos()?;
        io.print("Created todos:");
        for todo in todos {
            print_todo(io, &todo);
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

    #[test]
    fn test_lists_todos() {
        let (service, _temp_dir) = create_service();
        let todo = Todo::new("Walk dog", Utc::now(), "pets", 2);
        service.create_todo(&todo).unwrap();

        let mut io = ScriptedIo::default();
        ListTodosCommand::new(service).execute(&mut io).unwrap();

        assert_eq!(io.output()[0], "Created todos:");
        assert_eq!(io.output()[1], format!(" - {}", todo));
        assert_eq!(io.output().len(), 2);
    }

    #[test]
    fn test_lists_nothing() {
        let (service, _temp_dir) = create_service();
        let mut io = ScriptedIo::default();
        ListTodosCommand::new(service).execute(&mut io).unwrap();
        assert_eq!(io.output(), ["Created todos:"]);
    }
}
