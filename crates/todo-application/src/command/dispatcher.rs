//! Name to handler lookup.

use super::{Command, CommandIo};
use todo_core::error::Result;

/// Printed when the input matches no registered command.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "The command does not exist, try again!";

/// Result of dispatching one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A command with this name ran to completion.
    Executed(String),
    /// No command matched; the user has been told.
    Unknown,
}

/// Registry of commands in registration order.
#[derive(Default)]
pub struct CommandService {
    commands: Vec<Box<dyn Command>>,
}

impl CommandService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// A command whose name equals (ignoring case) an already registered one
    /// replaces it and takes over its position in the menu.
    pub fn register(&mut self, command: Box<dyn Command>) {
        match self.position(command.name()) {
            Some(index) => {
                tracing::debug!("Replacing command '{}'", command.name());
                self.commands[index] = command;
            }
            None => self.commands.push(command),
        }
    }

    /// Runs the command named by `input` (surrounding whitespace ignored).
    ///
    /// An unknown name is reported through `io` and is not an error. Errors
    /// returned by the handler are passed on to the caller.
    pub fn execute(&self, input: &str, io: &mut dyn CommandIo) -> Result<Dispatch> {
        let name = input.trim();
        let Some(index) = self.position(name) else {
            tracing::debug!("Unknown command '{}'", name);
            io.print(UNKNOWN_COMMAND_MESSAGE);
            return Ok(Dispatch::Unknown);
        };

        let command = &self.commands[index];
        tracing::debug!("Executing command '{}'", command.name());
        command.execute(io)?;
        Ok(Dispatch::Executed(command.name().to_string()))
    }

    /// Registered commands in menu order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Menu lines of the form `<name> - <description>`.
    pub fn menu(&self) -> Vec<String> {
        self.commands()
            .map(|c| format!("{} - {}", c.name(), c.description()))
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.commands
            .iter()
            .position(|c| c.name().to_lowercase() == name)
    }
}
