use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A single task on the board.
///
/// A task only appears on the timeline when both `start_date` and `due_date`
/// are set; undated tasks are still valid board members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new unscheduled task with sensible defaults.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            start_date: None,
            due_date: None,
        }
    }

    /// Create a new task scheduled from `start` to `due`.
    pub fn scheduled(title: impl Into<String>, start: NaiveDate, due: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            due_date: Some(due),
            ..Self::new(title)
        }
    }

    /// True when the task has both dates and can appear on the timeline.
    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() && self.due_date.is_some()
    }

    /// Start and due date as a pair, when both are present.
    pub fn schedule(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.due_date?))
    }
}
