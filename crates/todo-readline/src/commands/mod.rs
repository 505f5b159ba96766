//! Command handlers registered with the REPL.
//!
//! Each handler turns user input into one `TodoService` call and formats
//! the result. Storage errors are returned to the REPL, which reports them.

pub mod count;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod status;

pub use count::CountTodosCommand;
pub use create::CreateTodoCommand;
pub use delete::DeleteTodoCommand;
pub use list::ListTodosCommand;
pub use search::SearchTodosCommand;
pub use status::SetStatusCommand;

use std::sync::Arc;
use todo_application::{CommandIo, CommandService};
use todo_core::error::Result;
use todo_core::todo::{Todo, TodoService};
use uuid::Uuid;

/// Printed when a command targets an id with no todo behind it.
pub const TODO_NOT_FOUND_MESSAGE: &str = "No such todo was found.";

/// Registers every handler in menu order.
pub fn register_all(commands: &mut CommandService, todo_service: Arc<dyn TodoService>) {
    commands.register(Box::new(ListTodosCommand::new(todo_service.clone())));
    commands.register(Box::new(CreateTodoCommand::new(todo_service.clone())));
    commands.register(Box::new(SearchTodosCommand::new(todo_service.clone())));
    commands.register(Box::new(SetStatusCommand::complete(todo_service.clone())));
    commands.register(Box::new(DeleteTodoCommand::new(todo_service.clone())));
    commands.register(Box::new(SetStatusCommand::start(todo_service.clone())));
    commands.register(Box::new(CountTodosCommand::new(todo_service)));
}

/// Prints one todo as a list item.
fn print_todo(io: &mut dyn CommandIo, todo: &Todo) {
    io.print(&format!(" - {}", todo));
}

/// Asks for a todo id.
///
/// Returns `Ok(None)` if input ended or the answer is not a UUID; in the
/// latter case the user has been told.
fn query_todo_id(io: &mut dyn CommandIo) -> Result<Option<Uuid>> {
    let Some(answer) = io.prompt("Enter todo id: ")? else {
        return Ok(None);
    };

    match Uuid::try_parse(answer.trim()) {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            io.print("Invalid id, it must be a UUID.");
            Ok(None)
        }
    }
}

/// Re-prompts until `parse` accepts the answer, printing `retry` after each
/// rejected answer. `Ok(None)` means input ended.
fn prompt_until<T>(
    io: &mut dyn CommandIo,
    message: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    loop {
        let Some(answer) = io.prompt(message)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Some(value) => return Ok(Some(value)),
            None => io.print(retry),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use tempfile::TempDir;
    use todo_application::DefaultTodoService;
    use todo_core::todo::TodoService;
    use todo_infrastructure::FileTodoRepository;

    pub fn create_service() -> (Arc<dyn TodoService>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Arc::new(FileTodoRepository::new(temp_dir.path()));
        (Arc::new(DefaultTodoService::new(repo)), temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_application::ScriptedIo;

    #[test]
    fn test_query_todo_id() {
        let id = Uuid::new_v4();
        let mut io = ScriptedIo::new([format!("  {}  ", id)]);
        assert_eq!(query_todo_id(&mut io).unwrap(), Some(id));

        let mut io = ScriptedIo::new(["nope"]);
        assert_eq!(query_todo_id(&mut io).unwrap(), None);
        assert_eq!(io.output(), ["Invalid id, it must be a UUID."]);

        let mut io = ScriptedIo::default();
        assert_eq!(query_todo_id(&mut io).unwrap(), None);
        assert!(io.output().is_empty());
    }

    #[test]
    fn test_prompt_until_retries() {
        let mut io = ScriptedIo::new(["x", "y", "42"]);
        let value = prompt_until(&mut io, "n: ", "again", |s| s.parse::<i32>().ok()).unwrap();
        assert_eq!(value, Some(42));
        assert_eq!(io.output(), ["again", "again"]);
    }

    #[test]
    fn test_register_all_menu_order() {
        let (service, _temp_dir) = test_support::create_service();
        let mut commands = CommandService::new();
        register_all(&mut commands, service);

        let names: Vec<&str> = commands.commands().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "list-todos",
                "create-todo",
                "search-todos",
                "complete-todo",
                "delete-todo",
                "start-todo",
                "count"
            ]
        );
    }
}
