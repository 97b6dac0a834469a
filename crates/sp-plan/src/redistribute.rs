//! Spreading pending work over the days that are left.

use chrono::NaiveDate;
use sp_core::entities::{Reschedule, StudyTask};
use sp_core::enums::TaskStatus;

use crate::{day_after, days_until};

/// Compute new dates for the pending tasks of a plan.
///
/// Pending tasks are packed front-to-back starting at `today`, at most
/// `ceil(pending / remaining_days)` per day. Completed and missed tasks are
/// left alone. When `commit_missed` is set every moved task is tagged as
/// adjusted. Returns no moves when nothing is pending or the deadline is
/// not after `today`.
#[must_use]
pub fn redistribute(
    tasks: &[StudyTask],
    today: NaiveDate,
    deadline: NaiveDate,
    commit_missed: bool,
) -> Vec<Reschedule> {
    let mut pending: Vec<&StudyTask> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .collect();
    if pending.is_empty() {
        return Vec::new();
    }
    let Some(remaining) = days_until(today, deadline) else {
        return Vec::new();
    };
    pending.sort_by_key(|t| (t.task_date, t.id));

    let count = u32::try_from(pending.len()).unwrap_or(u32::MAX);
    let per_day = count.div_ceil(remaining);

    pending
        .iter()
        .zip(0u32..)
        .map(|(task, position)| Reschedule {
            task_id: task.id,
            task_date: day_after(today, position / per_day),
            description: if commit_missed {
                adjusted_description(&task.description)
            } else {
                task.description.clone()
            },
        })
        .collect()
}

/// Tag a task description after a missed commit.
#[must_use]
pub fn adjusted_description(description: &str) -> String {
    format!("[ADJUSTED] {description} (Increased workload due to missed commit)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i64, day: NaiveDate, status: TaskStatus) -> StudyTask {
        StudyTask {
            id,
            plan_id: 1,
            task_date: day,
            description: format!("task {id}"),
            requires_commit: true,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn packs_pending_tasks_from_today() {
        let today = date(2026, 10, 19);
        let tasks: Vec<StudyTask> = (1..=5)
            .map(|i| task(i, date(2026, 10, 10 + i as u32), TaskStatus::Pending))
            .collect();

        // 5 pending over 2 days: 3 per day
        let moves = redistribute(&tasks, today, date(2026, 10, 21), false);
        let offsets: Vec<i64> = moves
            .iter()
            .map(|m| (m.task_date - today).num_days())
            .collect();
        assert_eq!(offsets, vec![0, 0, 0, 1, 1]);
        assert_eq!(moves[0].description, "task 1");
    }

    #[test]
    fn one_per_day_when_room_allows() {
        let today = date(2026, 10, 19);
        let tasks = vec![
            task(1, date(2026, 10, 1), TaskStatus::Pending),
            task(2, date(2026, 10, 2), TaskStatus::Pending),
        ];
        let moves = redistribute(&tasks, today, date(2026, 10, 29), false);
        assert_eq!(moves[0].task_date, today);
        assert_eq!(moves[1].task_date, date(2026, 10, 20));
    }

    #[test]
    fn only_pending_tasks_move() {
        let today = date(2026, 10, 19);
        let tasks = vec![
            task(1, date(2026, 10, 1), TaskStatus::Completed),
            task(2, date(2026, 10, 2), TaskStatus::Missed),
            task(3, date(2026, 10, 3), TaskStatus::Pending),
        ];
        let moves = redistribute(&tasks, today, date(2026, 10, 25), false);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].task_id, 3);
    }

    #[test]
    fn missed_commit_tags_descriptions() {
        let today = date(2026, 10, 19);
        let tasks = vec![task(7, date(2026, 10, 1), TaskStatus::Pending)];
        let moves = redistribute(&tasks, today, date(2026, 10, 25), true);
        assert_eq!(
            moves[0].description,
            "[ADJUSTED] task 7 (Increased workload due to missed commit)"
        );
    }

    #[test]
    fn expired_deadline_is_noop() {
        let today = date(2026, 10, 19);
        let tasks = vec![task(1, date(2026, 10, 1), TaskStatus::Pending)];
        assert!(redistribute(&tasks, today, today, true).is_empty());
        assert!(redistribute(&tasks, today, date(2026, 10, 2), true).is_empty());
    }

    #[test]
    fn nothing_pending_is_noop() {
        let tasks = vec![task(1, date(2026, 10, 1), TaskStatus::Completed)];
        assert!(redistribute(&tasks, date(2026, 10, 19), date(2026, 10, 25), false).is_empty());
    }

    #[test]
    fn unsorted_input_is_processed_in_date_order() {
        let today = date(2026, 10, 19);
        let tasks = vec![
            task(2, date(2026, 10, 5), TaskStatus::Pending),
            task(1, date(2026, 10, 4), TaskStatus::Pending),
        ];
        let moves = redistribute(&tasks, today, date(2026, 10, 25), false);
        assert_eq!(moves[0].task_id, 1);
        assert_eq!(moves[1].task_id, 2);
    }
}
