use chrono::NaiveDate;

use crate::model::Task;

/// Horizontal pixels per calendar day on the timeline.
pub const DAY_WIDTH: f32 = 48.0;

/// Pixels subtracted from a bar's width so neighbouring bars stay visually
/// separated.
pub const BAR_GUTTER: f32 = 8.0;

/// The visible date axis, derived from the task collection.
///
/// Never stored: re-derived whenever the collection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineAxis {
    /// Earliest start date over all scheduled tasks.
    pub earliest: NaiveDate,
    /// Latest due date over all scheduled tasks.
    pub latest: NaiveDate,
}

impl TimelineAxis {
    /// Derive the axis from the task collection.
    ///
    /// Only tasks with both dates participate. Returns `None` when no task is
    /// scheduled, which the caller renders as an empty state.
    pub fn derive(tasks: &[Task]) -> Option<Self> {
        let mut earliest: Option<NaiveDate> = None;
        let mut latest: Option<NaiveDate> = None;
        for (start, due) in tasks.iter().filter_map(Task::schedule) {
            earliest = Some(earliest.map_or(start, |e| e.min(start)));
            latest = Some(latest.map_or(due, |l| l.max(due)));
        }
        Some(Self {
            earliest: earliest?,
            latest: latest?,
        })
    }

    /// Number of days spanned, inclusive of both endpoints. Always >= 1.
    pub fn day_count(&self) -> i64 {
        (self.latest - self.earliest).num_days() + 1
    }

    /// Every calendar day from earliest to latest inclusive, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let earliest = self.earliest;
        (0..self.day_count()).map(move |i| earliest + chrono::Duration::days(i))
    }

    /// Total axis width in pixels.
    pub fn total_width(&self) -> f32 {
        self.day_count() as f32 * DAY_WIDTH
    }
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
    fn derive_spans_min_start_to_max_due() {
        let tasks = vec![
            Task::scheduled("a", date("2023-06-01"), date("2023-06-05")),
            Task::scheduled("b", date("2023-06-03"), date("2023-06-10")),
        ];
        let axis = TimelineAxis::derive(&tasks).unwrap();
        assert_eq!(axis.earliest, date("2023-06-01"));
        assert_eq!(axis.latest, date("2023-06-10"));
        assert_eq!(axis.day_count(), 10);
    }

    #[test]
    fn derive_is_none_without_scheduled_tasks() {
        assert!(TimelineAxis::derive(&[]).is_none());

        let mut only_start = Task::new("start only");
        only_start.start_date = Some(date("2023-06-01"));
        assert!(TimelineAxis::derive(&[only_start]).is_none());

        let mut only_due = Task::new("due only");
        only_due.due_date = Some(date("2023-06-01"));
        assert!(TimelineAxis::derive(&[only_due]).is_none());
    }

    #[test]
    fn day_count_is_at_least_one() {
        let tasks = vec![Task::scheduled("zero", date("2023-06-01"), date("2023-06-01"))];
        let axis = TimelineAxis::derive(&tasks).unwrap();
        assert_eq!(axis.day_count(), 1);
        assert_eq!((axis.latest - axis.earliest).num_days() + 1, axis.day_count());
    }

    #[test]
    fn days_yields_every_date_inclusive() {
        let tasks = vec![Task::scheduled("a", date("2023-06-28"), date("2023-07-02"))];
        let axis = TimelineAxis::derive(&tasks).unwrap();
        let days: Vec<_> = axis.days().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], date("2023-06-28"));
        assert_eq!(days[4], date("2023-07-02"));
    }
}
