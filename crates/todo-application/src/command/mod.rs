//! Command dispatch.
//!
//! A `Command` is a named handler the REPL can run. `CommandService` is the
//! lookup table that maps typed input to a handler. Handlers talk to the user
//! through `CommandIo` and to storage only through `TodoService`.

mod dispatcher;
mod io;

pub use dispatcher::{CommandService, Dispatch, UNKNOWN_COMMAND_MESSAGE};
pub use io::{CommandIo, ScriptedIo};

use todo_core::error::Result;

/// A named action the user can run from the REPL.
pub trait Command {
    /// Name typed by the user (matched ignoring case).
    fn name(&self) -> &str;

    /// One-line description shown in the menu.
    fn description(&self) -> &str;

    /// Runs the command.
    fn execute(&self, io: &mut dyn CommandIo) -> Result<()>;
}
