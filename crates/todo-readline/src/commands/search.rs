use super::print_todo;
use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::TodoService;

/// Prints todos whose title contains a query.
pub struct SearchTodosCommand {
    todo_service: Arc<dyn TodoService>,
}

impl SearchTodosCommand {
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }
}

impl Command for SearchTodosCommand {
    fn name(&self) -> &str {
        "search-todos"
    }

    fn description(&self) -> &str {
        "Search for todos"
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        io.print("Search for todos.");
        let Some(query) = io.prompt("Enter a search query: ")? else {
            return Ok(());
        };

        for todo in self.todo_service.search_todos(&query)? {
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
    fn test_prints_sorted_matches() {
        let (service, _temp_dir) = create_service();
        let milk = Todo::new("Buy milk", Utc::now(), "errands", 1);
        let bread = Todo::new("buy Bread", Utc::now(), "errands", 1);
        let house = Todo::new("Clean house", Utc::now(), "home", 1);
        for todo in [&milk, &bread, &house] {
            service.create_todo(todo).unwrap();
        }

        let mut io = ScriptedIo::new(["BUY"]);
        SearchTodosCommand::new(service).execute(&mut io).unwrap();

        assert_eq!(
            io.output(),
            [
                "Search for todos.".to_string(),
                format!(" - {}", bread),
                format!(" - {}", milk),
            ]
        );
    }
}
