use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// A task board: the owned task collection plus metadata.
///
/// The task list is private on purpose. Every mutation goes through
/// [`Board::update_tasks`], which replaces the collection with a pure
/// transform of the previous value, so stale snapshots held by widgets can
/// never clobber a concurrent edit made earlier in the same frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    tasks: Vec<Task>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            name: "Untitled Board".to_string(),
            tasks: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tasks(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
            ..Default::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn task(&self, id: uuid::Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the task collection with a transform of the previous value.
    /// This is the only write path into task data.
    pub fn update_tasks(&mut self, f: impl FnOnce(&[Task]) -> Vec<Task>) {
        self.tasks = f(&self.tasks);
        self.touch();
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tasks_sees_previous_value() {
        let mut board = Board::with_tasks("b", vec![Task::new("one"), Task::new("two")]);
        board.update_tasks(|prev| {
            assert_eq!(prev.len(), 2);
            prev.iter().cloned().chain([Task::new("three")]).collect()
        });
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn update_tasks_touches_modified() {
        let mut board = Board::new("b");
        let before = board.modified;
        board.update_tasks(|prev| prev.to_vec());
        assert!(board.modified >= before);
    }
}
