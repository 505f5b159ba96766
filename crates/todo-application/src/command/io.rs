//! Terminal abstraction handed to commands.

use std::collections::VecDeque;
use todo_core::error::Result;

/// Line-based input and output for a running command.
pub trait CommandIo {
    /// Shows `message` and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Writes one line of output.
    fn print(&mut self, line: &str);

    /// Writes one line reporting a failure.
    fn print_error(&mut self, line: &str) {
        self.print(line);
    }
}

/// A `CommandIo` fed from a fixed list of input lines, recording all output.
///
/// Used for tests and for running commands non-interactively.
#[derive(Debug, Default, Clone)]
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedIo {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines printed so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines that were never consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl CommandIo for ScriptedIo {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.inputs.pop_front())
    }

    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_io_replays_inputs() {
        let mut io = ScriptedIo::new(["first", "second"]);

        assert_eq!(io.prompt("a: ").unwrap().as_deref(), Some("first"));
        io.print("hello");
        assert_eq!(io.prompt("b: ").unwrap().as_deref(), Some("second"));
        assert_eq!(io.prompt("c: ").unwrap(), None);

        assert_eq!(io.prompts(), ["a: ", "b: ", "c: "]);
        assert_eq!(io.output(), ["hello"]);
        assert_eq!(io.remaining_inputs(), 0);
    }
}
