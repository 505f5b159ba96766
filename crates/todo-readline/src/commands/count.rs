use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::TodoService;

/// Prints how many todos are stored.
pub struct CountTodosCommand {
    todo_service: Arc<dyn TodoService>,
}

impl CountTodosCommand {
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }
}

impl Command for CountTodosCommand {
    fn name(&self) -> &str {
        "count"
    }

    fn description(&self) -> &str {
        "Count all todos"
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        let count = self.todo_service.count_todos()?;
        io.print(&format!("Todos: {}", count));
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
    fn test_counts() {
        let (service, _temp_dir) = create_service();
        for title in ["a", "b", "c"] {
            service.create_todo(&Todo::new(title, Utc::now(), "x", 0)).unwrap();
        }

        let mut io = ScriptedIo::default();
        CountTodosCommand::new(service).execute(&mut io).unwrap();
        assert_eq!(io.output(), ["Todos: 3"]);
    }
}
