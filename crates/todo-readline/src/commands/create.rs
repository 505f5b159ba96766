use super::prompt_until;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use todo_application::{Command, CommandIo};
use todo_core::error::Result;
use todo_core::todo::{DATE_FORMAT, Todo, TodoService};

/// Interactively builds a new todo and saves it.
pub struct CreateTodoCommand {
    todo_service: Arc<dyn TodoService>,
}

impl CreateTodoCommand {
    pub fn new(todo_service: Arc<dyn TodoService>) -> Self {
        Self { todo_service }
    }
}

fn non_blank(answer: &str) -> Option<String> {
    (!answer.trim().is_empty()).then(|| answer.to_string())
}

/// Parses `year-month-day` as midnight UTC.
fn parse_deadline(answer: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(answer.trim(), DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

impl Command for CreateTodoCommand {
    fn name(&self) -> &str {
        "create-todo"
    }

    fn description(&self) -> &str {
        "Create and save a new todo"
    }

    fn execute(&self, io: &mut dyn CommandIo) -> Result<()> {
        io.print("Create a todo.");

        let Some(title) = prompt_until(
            io,
            "Enter a title: ",
            "Title may not be empty or blank.",
            non_blank,
        )?
        else {
            return Ok(());
        };

        let Some(category) = prompt_until(
            io,
            "Enter a category: ",
            "Category may not be empty or blank.",
            non_blank,
        )?
        else {
            return Ok(());
        };

        let Some(priority) = prompt_until(
            io,
            "Enter a priority (higher number is higher priority): ",
            "You must provide a valid number.",
            |answer| answer.trim().parse::<i32>().ok(),
        )?
        else {
            return Ok(());
        };

        let Some(deadline) = prompt_until(
            io,
            "Enter a deadline date (year-month-day): ",
            "Invalid date format, try again.",
            parse_deadline,
        )?
        else {
            return Ok(());
        };

        let todo = Todo::new(title, deadline, category, priority);
        self.todo_service.create_todo(&todo)?;
        io.print(&format!("Todo '{}' has been created!", todo.title()));
        Ok(())
    }
}
