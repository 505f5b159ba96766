pub mod command;
pub mod todo_service;

pub use command::{
    Command, CommandIo, CommandService, Dispatch, ScriptedIo, UNKNOWN_COMMAND_MESSAGE,
};
pub use todo_service::DefaultTodoService;
