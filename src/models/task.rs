//! Task model
//!
//! Planning tasks with a simple three-state lifecycle and optional due dates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet started
    #[default]
    Todo,
    /// Work has begun
    InProgress,
    /// Finished
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "To do"),
            Self::InProgress => write!(f, "In progress"),
            Self::Done => write!(f, "Done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "todo" | "to_do" => Ok(Self::Todo),
            "in_progress" | "started" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(format!(
                "Unknown task status '{}' (expected todo, in_progress, or done)",
                other
            )),
        }
    }
}

/// A planning task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Short title
    pub title: String,

    /// Optional free-text notes
    pub notes: Option<String>,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Optional due date
    pub due_date: Option<NaiveDate>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            notes: None,
            status: TaskStatus::Todo,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the status, touching the modification timestamp
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Mark as in progress
    pub fn start(&mut self) {
        self.set_status(TaskStatus::InProgress);
    }

    /// Mark as done
    pub fn complete(&mut self) {
        self.set_status(TaskStatus::Done);
    }

    /// Check whether the task is done
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Check whether the task is overdue as of the given date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done() && self.due_date.is_some_and(|due| due < today)
    }

    /// Validate the task's user-editable fields
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Task title must not be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.due_date {
            Some(due) => write!(f, "{} [{}] due {}", self.title, self.status, due),
            None => write!(f, "{} [{}]", self.title, self.status),
        }
    }
}
