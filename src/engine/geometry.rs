use crate::model::Task;

use super::axis::{TimelineAxis, BAR_GUTTER, DAY_WIDTH};

/// Placement of one task's bar on the derived axis, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    /// Days between the axis start and the task's start date.
    pub offset_days: i64,
    /// Days the bar covers, inclusive of both endpoints.
    pub duration_days: i64,
}

impl BarGeometry {
    /// Compute the bar placement for a task, or `None` if it is unscheduled.
    pub fn for_task(task: &Task, axis: &TimelineAxis) -> Option<Self> {
        let (start, due) = task.schedule()?;
        Some(Self {
            offset_days: (start - axis.earliest).num_days(),
            duration_days: (due - start).num_days() + 1,
        })
    }

    /// Left edge of the bar in pixels from the axis origin.
    pub fn x(&self) -> f32 {
        self.offset_days as f32 * DAY_WIDTH
    }

    /// Bar width in pixels, with the gutter subtracted.
    pub fn width(&self) -> f32 {
        self.duration_days as f32 * DAY_WIDTH - BAR_GUTTER
    }
}

/// Tasks in timeline row order: by start date ascending, undated tasks last.
/// The sort is stable so equal start dates keep their collection order.
pub fn timeline_rows(tasks: &[Task]) -> Vec<&Task> {
    let mut rows: Vec<&Task> = tasks.iter().collect();
    rows.sort_by_key(|t| (t.start_date.is_none(), t.start_date));
    rows
}

/// Tasks that appear on the timeline, in row order.
pub fn scheduled_rows(tasks: &[Task]) -> Vec<&Task> {
    timeline_rows(tasks)
        .into_iter()
        .filter(|t| t.is_scheduled())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn offsets_and_durations_match_axis() {
        let tasks = vec![
            Task::scheduled("a", date("2023-06-01"), date("2023-06-05")),
            Task::scheduled("b", date("2023-06-03"), date("2023-06-10")),
        ];
        let axis = TimelineAxis::derive(&tasks).unwrap();

        let a = BarGeometry::for_task(&tasks[0], &axis).unwrap();
        assert_eq!(a.offset_days, 0);
        assert_eq!(a.duration_days, 5);

        let b = BarGeometry::for_task(&tasks[1], &axis).unwrap();
        assert_eq!(b.offset_days, 2);
        assert_eq!(b.duration_days, 8);
    }

    #[test]
    fn bars_stay_within_axis_bounds() {
        let tasks = vec![
            Task::scheduled("a", date("2024-01-10"), date("2024-01-12")),
            Task::scheduled("b", date("2024-01-01"), date("2024-01-20")),
            Task::scheduled("c", date("2024-01-20"), date("2024-01-20")),
        ];
        let axis = TimelineAxis::derive(&tasks).unwrap();
        for task in &tasks {
            let geo = BarGeometry::for_task(task, &axis).unwrap();
            assert!(geo.offset_days >= 0);
            assert!(geo.offset_days + geo.duration_days - 1 <= axis.day_count() - 1);
        }
    }

    #[test]
    fn pixel_span_uses_day_width_and_gutter() {
        let tasks = vec![Task::scheduled("a", date("2023-06-01"), date("2023-06-05"))];
        let axis = TimelineAxis::derive(&tasks).unwrap();
        let geo = BarGeometry::for_task(&tasks[0], &axis).unwrap();
        assert_eq!(geo.x(), 0.0);
        assert_eq!(geo.width(), 5.0 * DAY_WIDTH - BAR_GUTTER);
    }

    #[test]
    fn unscheduled_task_has_no_geometry() {
        let tasks = vec![Task::scheduled("a", date("2023-06-01"), date("2023-06-05"))];
        let axis = TimelineAxis::derive(&tasks).unwrap();

        let mut start_only = Task::new("start only");
        start_only.start_date = Some(date("2023-06-02"));
        assert!(BarGeometry::for_task(&start_only, &axis).is_none());
        assert!(scheduled_rows(&[start_only]).is_empty());
    }

    #[test]
    fn rows_sort_by_start_with_undated_last() {
        let undated = Task::new("undated");
        let tasks = vec![
            Task::scheduled("late", date("2023-06-07"), date("2023-06-09")),
            undated,
            Task::scheduled("early", date("2023-06-01"), date("2023-06-02")),
        ];
        let rows = timeline_rows(&tasks);
        assert_eq!(rows[0].title, "early");
        assert_eq!(rows[1].title, "late");
        assert_eq!(rows[2].title, "undated");
    }
}
