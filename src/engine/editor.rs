use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{Priority, Task};

/// A snapshot copy of one task's fields, open for editing.
///
/// Edits touch only the draft; the owned collection changes on confirm or
/// delete and is untouched by cancel. At most one draft is open at a time
/// (the app holds an `Option<EditDraft>`).
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Whether the task keeps its dates on confirm. Unchecked drafts save
    /// the task as unscheduled.
    pub has_schedule: bool,
}

impl EditDraft {
    /// Snapshot a task for editing.
    pub fn open(task: &Task) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            start_date: task.start_date.unwrap_or(today),
            due_date: task.due_date.or(task.start_date).unwrap_or(today),
            has_schedule: task.is_scheduled(),
        }
    }

    /// Replace the matching task's fields with the draft's. Non-matching
    /// tasks pass through untouched; a vanished target makes this a no-op.
    pub fn confirm(&self, prev: &[Task]) -> Vec<Task> {
        // The dialog lets both dates be picked freely; keep them ordered.
        let (start, due) = if self.start_date <= self.due_date {
            (self.start_date, self.due_date)
        } else {
            (self.due_date, self.start_date)
        };
        prev.iter()
            .map(|t| {
                if t.id != self.id {
                    return t.clone();
                }
                Task {
                    id: t.id,
                    title: self.title.clone(),
                    description: self.description.clone(),
                    priority: self.priority,
                    start_date: self.has_schedule.then_some(start),
                    due_date: self.has_schedule.then_some(due),
                }
            })
            .collect()
    }

    /// Remove exactly the task this draft was opened on.
    pub fn delete(&self, prev: &[Task]) -> Vec<Task> {
        prev.iter().filter(|t| t.id != self.id).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Task};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn confirm_replaces_only_the_matching_task() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let b = Task::scheduled("b", date("2023-06-03"), date("2023-06-10"));
        let tasks = vec![a.clone(), b.clone()];

        let mut draft = EditDraft::open(&a);
        draft.title = "renamed".to_string();
        draft.priority = Priority::High;

        let next = draft.confirm(&tasks);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].title, "renamed");
        assert_eq!(next[0].priority, Priority::High);
        assert_eq!(next[0].id, a.id);
        assert_eq!(next[1].title, "b");
        assert_eq!(next[1].schedule(), b.schedule());
    }

    #[test]
    fn confirm_orders_inverted_dates() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let mut draft = EditDraft::open(&a);
        draft.start_date = date("2023-06-09");
        draft.due_date = date("2023-06-04");

        let next = draft.confirm(&[a]);
        assert_eq!(next[0].start_date, Some(date("2023-06-04")));
        assert_eq!(next[0].due_date, Some(date("2023-06-09")));
    }

    #[test]
    fn confirm_can_unschedule_a_task() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let mut draft = EditDraft::open(&a);
        draft.has_schedule = false;

        let next = draft.confirm(&[a]);
        assert!(!next[0].is_scheduled());
    }

    #[test]
    fn cancel_is_a_pure_snapshot_discard() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let tasks = vec![a.clone()];
        let mut draft = EditDraft::open(&a);
        draft.title = "never applied".to_string();
        drop(draft);
        assert_eq!(tasks[0].title, "a");
    }

    #[test]
    fn delete_removes_exactly_one_by_id() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let b = Task::scheduled("b", date("2023-06-03"), date("2023-06-10"));
        let c = Task::new("c");
        let tasks = vec![a.clone(), b.clone(), c.clone()];

        let draft = EditDraft::open(&b);
        let next = draft.delete(&tasks);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, a.id);
        assert_eq!(next[0].title, a.title);
        assert_eq!(next[0].schedule(), a.schedule());
        assert_eq!(next[1].id, c.id);
        assert_eq!(next[1].title, c.title);
    }

    #[test]
    fn delete_of_a_vanished_task_changes_nothing() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let gone = Task::new("gone");
        let draft = EditDraft::open(&gone);
        let next = draft.delete(&[a.clone()]);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, a.id);
    }
}
