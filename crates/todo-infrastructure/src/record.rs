//! Line-oriented record codec.
//!
//! A todo is stored as six lines in fixed order:
//!
//! ```text
//! <uuid>
//! <title>
//! <category>
//! <status machine name>
//! <priority>
//! <deadline as unix seconds>
//! ```
//!
//! There is no escaping. A newline inside the title or category shifts every
//! following field and corrupts the record.

use chrono::DateTime;
use std::str::FromStr;
use todo_core::error::{Result, TodoError};
use todo_core::todo::{Todo, TodoStatus};
use uuid::Uuid;

/// Number of lines in a record.
pub const FIELD_COUNT: usize = 6;

/// Encodes a todo as its six-line record. No trailing newline is written.
///
/// The deadline is truncated to whole seconds.
pub fn encode(todo: &Todo) -> String {
    [
        todo.id().to_string(),
        todo.title().to_string(),
        todo.category().to_string(),
        todo.status().machine_name().to_string(),
        todo.priority().to_string(),
        todo.deadline().timestamp().to_string(),
    ]
    .join("\n")
}

/// Decodes a record body into a todo with the given id.
///
/// The id on the first line is not consulted; the caller's id (taken from the
/// file name) is authoritative. Lines after the sixth are ignored.
pub fn decode(id: Uuid, body: &str) -> Result<Todo> {
    let lines: Vec<&str> = body.lines().take(FIELD_COUNT).collect();
    let &[_, title, category, status, priority, deadline] = lines.as_slice() else {
        return Err(TodoError::malformed(
            id,
            format!("expected {} lines, found {}", FIELD_COUNT, lines.len()),
        ));
    };

    let status = TodoStatus::from_str(status)
        .map_err(|_| TodoError::malformed(id, format!("unknown status '{}'", status)))?;
    let priority: i32 = priority.parse().map_err(|e| {
        TodoError::malformed(id, format!("invalid priority '{}': {}", priority, e))
    })?;
    let seconds: i64 = deadline.parse().map_err(|e| {
        TodoError::malformed(id, format!("invalid deadline '{}': {}", deadline, e))
    })?;
    let deadline = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        TodoError::malformed(id, format!("deadline {} out of range", seconds))
    })?;

    Ok(Todo::from_parts(id, title, deadline, category, priority, status))
}
