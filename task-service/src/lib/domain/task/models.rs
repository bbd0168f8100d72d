use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::task::errors::TaskIdError;
use crate::domain::task::errors::TaskTitleError;
use crate::user::models::Username;

/// Task aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_by: Username,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Apply the provided fields of an update, leaving the rest untouched.
    pub fn apply(&mut self, command: UpdateTaskCommand) {
        if let Some(title) = command.title {
            self.title = title;
        }
        if let Some(description) = command.description {
            self.description = description;
        }
        if let Some(status) = command.status {
            self.status = status;
        }
        if let Some(due_date) = command.due_date {
            self.due_date = Some(due_date);
        }
    }
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Non-empty after trimming whitespace, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Empty` - Title is empty or only whitespace
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TaskTitleError> {
        let trimmed = title.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(TaskTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TaskTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new task.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// Command to partially update a task.
///
/// Only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTaskCommand {
    pub title: Option<TaskTitle>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskCommand {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}
