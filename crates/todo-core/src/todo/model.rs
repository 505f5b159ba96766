//! Todo domain model.
//!
//! This module contains the `Todo` entity and its `TodoStatus` value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use uuid::Uuid;

/// Date format used when a deadline is shown to or read from the user.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The status of a todo.
///
/// This is a closed set. Any status may be changed into any other status;
/// there is no terminal state.
///
/// `FromStr` and `Into<&'static str>` use the machine name (`PENDING`, `IN_PROGRESS`,
/// `COMPLETED`), which is the persisted form. `Display` uses the display name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Currently being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl TodoStatus {
    /// Returns every status in declaration order.
    pub fn all() -> impl Iterator<Item = TodoStatus> {
        Self::iter()
    }

    /// Returns the stable name used in the on-disk record.
    pub fn machine_name(&self) -> &'static str {
        self.into()
    }

    /// Returns the name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single todo item.
///
/// The `id` is assigned once and has no setter; it is also the storage key of
/// the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: Uuid,
    title: String,
    deadline: DateTime<Utc>,
    category: String,
    priority: i32,
    status: TodoStatus,
}

impl Todo {
    /// Creates a brand new todo with a random id and `Pending` status.
    pub fn new(
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        category: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            deadline,
            category: category.into(),
            priority,
            status: TodoStatus::Pending,
        }
    }

    /// Rebuilds a todo that already has an identity, e.g. one read from storage.
    pub fn from_parts(
        id: Uuid,
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        category: impl Into<String>,
        priority: i32,
        status: TodoStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            deadline,
            category: category.into(),
            priority,
            status,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: DateTime<Utc>) {
        self.deadline = deadline;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Higher means more urgent.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TodoStatus) {
        self.status = status;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n    Id: {}\n    Status: {}\n    Category: {}\n    Deadline: {}\n    Priority: {}",
            self.title,
            self.id,
            self.status.display_name(),
            self.category,
            self.deadline.format(DATE_FORMAT),
            self.priority
        )
    }
}
