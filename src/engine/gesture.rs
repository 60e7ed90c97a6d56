use chrono::{Duration, NaiveDate};
use log::debug;
use uuid::Uuid;

use crate::model::{Board, Task};

use super::axis::DAY_WIDTH;

/// Convert a horizontal pointer displacement into whole days.
fn delta_days(delta_x: f32) -> i64 {
    (delta_x / DAY_WIDTH).round() as i64
}

/// Transient state of a single pointer interaction with the timeline.
///
/// Captured origin values are the anti-drift anchor: every pointer move
/// recomputes the day delta against the position and dates recorded at
/// pointer-down, never against the task's current dates, so rounding can
/// not compound across events. The state lives for exactly one gesture and
/// [`GestureState::finish`] is the single teardown path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Bar body grabbed: both dates shift together, preserving the offset.
    Dragging {
        task_id: Uuid,
        origin_x: f32,
        original_start: NaiveDate,
        original_due: NaiveDate,
    },
    /// Trailing-edge handle grabbed: only the due date moves.
    Resizing {
        task_id: Uuid,
        origin_x: f32,
        original_due: NaiveDate,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// The task currently being dragged or resized, if any.
    pub fn active_task(&self) -> Option<Uuid> {
        match *self {
            GestureState::Idle => None,
            GestureState::Dragging { task_id, .. } | GestureState::Resizing { task_id, .. } => {
                Some(task_id)
            }
        }
    }

    /// Pointer-down on a bar body. Ignored unless idle and the task is
    /// scheduled; a later double-click is only treated as a click because
    /// this guard kept the machine idle.
    pub fn begin_drag(&mut self, task: &Task, pointer_x: f32) {
        if !self.is_idle() {
            return;
        }
        if let Some((start, due)) = task.schedule() {
            debug!("drag start: '{}' at x={pointer_x}", task.title);
            *self = GestureState::Dragging {
                task_id: task.id,
                origin_x: pointer_x,
                original_start: start,
                original_due: due,
            };
        }
    }

    /// Pointer-down on a bar's trailing-edge handle. Only the due date is
    /// captured; the clamp floor is read from the task at apply time.
    pub fn begin_resize(&mut self, task: &Task, pointer_x: f32) {
        if !self.is_idle() {
            return;
        }
        if let Some(due) = task.due_date {
            debug!("resize start: '{}' at x={pointer_x}", task.title);
            *self = GestureState::Resizing {
                task_id: task.id,
                origin_x: pointer_x,
                original_due: due,
            };
        }
    }

    /// Pointer moved to `pointer_x` during an active gesture.
    ///
    /// Applies the date shift to the target task through the board's
    /// functional updater and reports whether anything changed. A zero day
    /// delta mutates nothing; a target that has vanished from the collection
    /// drops the move silently.
    pub fn pointer_moved(&self, pointer_x: f32, board: &mut Board) -> bool {
        match *self {
            GestureState::Idle => false,
            GestureState::Dragging {
                task_id,
                origin_x,
                original_start,
                original_due,
            } => {
                let days = delta_days(pointer_x - origin_x);
                if days == 0 {
                    return false;
                }
                let new_start = original_start + Duration::days(days);
                let new_due = original_due + Duration::days(days);
                shift_task(board, task_id, move |t| {
                    t.start_date = Some(new_start);
                    t.due_date = Some(new_due);
                })
            }
            GestureState::Resizing {
                task_id,
                origin_x,
                original_due,
            } => {
                let days = delta_days(pointer_x - origin_x);
                if days == 0 {
                    return false;
                }
                let new_due = original_due + Duration::days(days);
                shift_task(board, task_id, move |t| {
                    // Never let the due date precede the start date; zero
                    // duration is the floor.
                    let clamped = match t.start_date {
                        Some(start) => new_due.max(start),
                        None => new_due,
                    };
                    t.due_date = Some(clamped);
                })
            }
        }
    }

    /// End the gesture and discard all captured origin state. Called on
    /// pointer-up through every exit path, including host teardown.
    pub fn finish(&mut self) {
        if !self.is_idle() {
            debug!("gesture finished");
        }
        *self = GestureState::Idle;
    }
}

/// Apply `edit` to the task with `id` via the board's functional updater.
/// Returns false when the task no longer exists or the edit was a no-op.
fn shift_task(board: &mut Board, id: Uuid, edit: impl Fn(&mut Task)) -> bool {
    let mut changed = false;
    board.update_tasks(|prev| {
        prev.iter()
            .map(|t| {
                if t.id != id {
                    return t.clone();
                }
                let mut next = t.clone();
                edit(&mut next);
                changed = next.start_date != t.start_date || next.due_date != t.due_date;
                next
            })
            .collect()
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Task};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn board_with(task: Task) -> Board {
        Board::with_tasks("test", vec![task])
    }

    fn dates(board: &Board) -> (NaiveDate, NaiveDate) {
        board.tasks()[0].schedule().unwrap()
    }

    #[test]
    fn drag_shifts_both_dates_from_origin() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 10.0);
        // 100 px at 48 px/day rounds to +2 days.
        assert!(gesture.pointer_moved(110.0, &mut board));
        assert_eq!(dates(&board), (date("2023-06-03"), date("2023-06-07")));
        gesture.finish();
        assert!(gesture.is_idle());
    }

    #[test]
    fn drag_back_restores_dates_exactly() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 0.0);
        assert!(gesture.pointer_moved(100.0, &mut board));
        gesture.finish();

        let shifted = board.tasks()[0].clone();
        gesture.begin_drag(&shifted, 0.0);
        assert!(gesture.pointer_moved(-96.0, &mut board));
        gesture.finish();

        assert_eq!(dates(&board), (date("2023-06-01"), date("2023-06-05")));
    }

    #[test]
    fn moves_recompute_from_origin_not_incrementally() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 0.0);
        // Three intermediate events; only the final pointer position counts.
        gesture.pointer_moved(48.0, &mut board);
        gesture.pointer_moved(96.0, &mut board);
        gesture.pointer_moved(48.0, &mut board);
        assert_eq!(dates(&board), (date("2023-06-02"), date("2023-06-06")));
    }

    #[test]
    fn resize_shifts_due_only() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_resize(&task, 200.0);
        assert!(gesture.pointer_moved(200.0 + 2.0 * DAY_WIDTH, &mut board));
        assert_eq!(dates(&board), (date("2023-06-01"), date("2023-06-07")));
    }

    #[test]
    fn resize_clamps_at_start_date() {
        // Due is 3 days after start; pull left by far more than 3 days.
        let task = Task::scheduled("t", date("2023-06-02"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_resize(&task, 500.0);
        assert!(gesture.pointer_moved(500.0 - 10.0 * DAY_WIDTH, &mut board));
        assert_eq!(dates(&board), (date("2023-06-02"), date("2023-06-02")));
    }

    #[test]
    fn zero_delta_mutates_nothing() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = board_with(task.clone());
        let modified = board.modified;
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 0.0);
        // 20 px rounds to zero days.
        assert!(!gesture.pointer_moved(20.0, &mut board));
        assert_eq!(board.modified, modified);
    }

    #[test]
    fn vanished_target_is_dropped_silently() {
        let task = Task::scheduled("t", date("2023-06-01"), date("2023-06-05"));
        let mut board = Board::with_tasks(
            "test",
            vec![Task::scheduled("other", date("2023-06-02"), date("2023-06-03"))],
        );
        let mut gesture = GestureState::default();

        // Task was captured, then removed from the collection.
        gesture.begin_drag(&task, 0.0);
        assert!(!gesture.pointer_moved(96.0, &mut board));
        assert_eq!(
            board.tasks()[0].schedule().unwrap(),
            (date("2023-06-02"), date("2023-06-03"))
        );
    }

    #[test]
    fn begin_is_refused_while_active() {
        let a = Task::scheduled("a", date("2023-06-01"), date("2023-06-05"));
        let b = Task::scheduled("b", date("2023-06-02"), date("2023-06-06"));
        let mut gesture = GestureState::default();

        gesture.begin_drag(&a, 0.0);
        gesture.begin_resize(&b, 50.0);
        assert_eq!(gesture.active_task(), Some(a.id));
    }

    #[test]
    fn unscheduled_task_cannot_start_a_drag() {
        let mut task = Task::new("no dates");
        task.start_date = Some(date("2023-06-01"));
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 0.0);
        assert!(gesture.is_idle());
    }

    #[test]
    fn drag_has_no_floor_before_the_axis() {
        // Dragging far left is allowed; the axis re-derives wider.
        let task = Task::scheduled("t", date("2023-06-05"), date("2023-06-07"));
        let mut board = board_with(task.clone());
        let mut gesture = GestureState::default();

        gesture.begin_drag(&task, 0.0);
        assert!(gesture.pointer_moved(-20.0 * DAY_WIDTH, &mut board));
        assert_eq!(dates(&board), (date("2023-05-16"), date("2023-05-18")));
    }
}
