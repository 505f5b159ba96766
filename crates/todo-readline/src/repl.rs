//! Interactive loop over the registered commands.

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};
use todo_application::{CommandIo, CommandService};
use todo_core::error::{Result, TodoError};

/// Input that ends the loop (matched ignoring case).
pub const EXIT_COMMAND: &str = "exit";

const COMMAND_PROMPT: &str = "Enter command: ";

/// Completes and hints registered command names.
#[derive(Clone)]
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(commands: &CommandService) -> Self {
        let mut names: Vec<String> = commands
            .commands()
            .map(|c| c.name().to_string())
            .collect();
        names.push(EXIT_COMMAND.to_string());
        Self { commands: names }
    }

    fn candidates<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a String> {
        let typed = line.to_lowercase();
        self.commands.iter().filter(move |cmd| {
            !typed.is_empty() && !typed.contains(' ') && cmd.to_lowercase().starts_with(&typed)
        })
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .candidates(&line[..pos])
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        self.candidates(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if hint.is_empty() {
            Borrowed(hint)
        } else {
            Owned(hint.bright_black().to_string())
        }
    }
}

impl Validator for CommandHelper {}

/// `CommandIo` over a rustyline editor and stdout.
pub struct RustylineIo {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl RustylineIo {
    pub fn new(commands: &CommandService) -> Result<Self> {
        let mut editor: Editor<CommandHelper, DefaultHistory> =
            Editor::new().map_err(readline_error)?;
        editor.set_helper(Some(CommandHelper::new(commands)));
        Ok(Self { editor })
    }
}

fn readline_error(err: ReadlineError) -> TodoError {
    TodoError::io(format!("Failed to read input: {}", err))
}

impl CommandIo for RustylineIo {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        match self.editor.readline(message) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::debug!("Failed to record history entry: {}", e);
                    }
                }
                Ok(Some(line))
            }
            // Ctrl-C and Ctrl-D both end the current input
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(readline_error(err)),
        }
    }

    fn print(&mut self, line: &str) {
        println!("{}", line);
    }

    fn print_error(&mut self, line: &str) {
        eprintln!("{}", line.red());
    }
}

/// Prints the banner and menu, then dispatches lines until `exit` or end of
/// input. A failing command is reported and the loop continues.
pub fn run(commands: &CommandService, io: &mut dyn CommandIo) -> Result<()> {
    io.print("=== TODO APPLICATION ===");
    io.print("Welcome! Choose from the following commands:");
    for line in commands.menu() {
        io.print(&line);
    }
    io.print(&format!("{} - Exit the application", EXIT_COMMAND));

    while let Some(line) = io.prompt(COMMAND_PROMPT)? {
        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        if let Err(e) = commands.execute(&line, io) {
            tracing::error!("Command '{}' failed: {}", line.trim(), e);
            io.print_error(&format!("An error occurred, message: {}", e));
        }
    }

    tracing::info!("REPL finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register_all;
    use crate::commands::test_support::create_service;
    use todo_application::{Command, ScriptedIo, UNKNOWN_COMMAND_MESSAGE};

    struct FailingCommand;

    impl Command for FailingCommand {
        fn name(&self) -> &str {
            "fail"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        fn execute(&self, _io: &mut dyn CommandIo) -> Result<()> {
            Err(TodoError::io("disk unplugged"))
        }
    }

    fn todo_commands() -> (CommandService, tempfile::TempDir) {
        let (service, temp_dir) = create_service();
        let mut commands = CommandService::new();
        register_all(&mut commands, service);
        (commands, temp_dir)
    }

    #[test]
    fn test_banner_and_menu() {
        let (commands, _temp_dir) = todo_commands();
        let mut io = ScriptedIo::default();
        run(&commands, &mut io).unwrap();

        assert_eq!(
            io.output(),
            [
                "=== TODO APPLICATION ===",
                "Welcome! Choose from the following commands:",
                "list-todos - List all created todos",
                "create-todo - Create and save a new todo",
                "search-todos - Search for todos",
                "complete-todo - Mark a todo as completed",
                "delete-todo - Remove todos",
                "start-todo - Mark a todo as in-progress",
                "count - Count all todos",
                "exit - Exit the application",
            ]
        );
        assert_eq!(io.prompts(), [COMMAND_PROMPT]);
    }

    #[test]
    fn test_exit_stops_reading() {
        let (commands, _temp_dir) = todo_commands();
        let mut io = ScriptedIo::new(["count", " EXIT ", "count"]);
        run(&commands, &mut io).unwrap();

        let output = io.output();
        assert_eq!(output.last().unwrap(), "Todos: 0");
        assert_eq!(io.remaining_inputs(), 1);
    }

    #[test]
    fn test_session_creates_and_completes() {
        let (commands, temp_dir) = todo_commands();
        let mut io = ScriptedIo::new([
            "create-todo",
            "Water plants",
            "home",
            "2",
            "2025-03-01",
            "count",
        ]);
        run(&commands, &mut io).unwrap();
        assert!(io.output().contains(&"Todo 'Water plants' has been created!".to_string()));
        assert_eq!(io.output().last().unwrap(), "Todos: 1");

        let record = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .next()
            .unwrap()
            .unwrap()
            .path();
        let id = record.file_stem().unwrap().to_str().unwrap().to_string();

        let mut io = ScriptedIo::new(["COMPLETE-TODO", id.as_str()]);
        run(&commands, &mut io).unwrap();
        assert_eq!(
            io.output().last().unwrap(),
            "Todo 'Water plants' is now completed."
        );
    }

    #[test]
    fn test_unknown_command_keeps_looping() {
        let (commands, _temp_dir) = todo_commands();
        let mut io = ScriptedIo::new(["", "frobnicate", "count"]);
        run(&commands, &mut io).unwrap();

        let tail: Vec<&str> = io.output()[10..].iter().map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![UNKNOWN_COMMAND_MESSAGE, UNKNOWN_COMMAND_MESSAGE, "Todos: 0"]
        );
    }

    #[test]
    fn test_failed_command_is_reported() {
        let mut commands = CommandService::new();
        commands.register(Box::new(FailingCommand));
        let mut io = ScriptedIo::new(["fail", "fail"]);

        run(&commands, &mut io).unwrap();

        let errors: Vec<&String> = io
            .output()
            .iter()
            .filter(|line| line.starts_with("An error occurred"))
            .collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            "An error occurred, message: IO error: disk unplugged"
        );
    }

    #[test]
    fn test_helper_candidates() {
        let (commands, _temp_dir) = todo_commands();
        let helper = CommandHelper::new(&commands);

        let names: Vec<&String> = helper.candidates("C").collect();
        assert_eq!(names, ["create-todo", "complete-todo", "count"]);
        assert_eq!(helper.candidates("ex").collect::<Vec<_>>(), ["exit"]);
        assert!(helper.candidates("").next().is_none());
        assert!(helper.candidates("count x").next().is_none());
    }
}
