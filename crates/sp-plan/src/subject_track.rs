//! Subject track: one reading session per day, cycling through subjects.

use chrono::NaiveDate;
use sp_core::entities::TaskDraft;

use crate::{PlanParams, day_after, days_until};

/// Generate the subject-track schedule for `[today, deadline)`.
///
/// The target is a comma-separated subject list. An empty target still
/// yields one (empty) subject label.
#[must_use]
pub fn generate(params: &PlanParams<'_>, today: NaiveDate) -> Vec<TaskDraft> {
    let Some(total_days) = days_until(today, params.deadline) else {
        return Vec::new();
    };

    let subjects: Vec<&str> = params.target.split(',').map(str::trim).collect();
    let count = subjects.len();

    (0..total_days)
        .map(|day| {
            let day_idx = day as usize;
            TaskDraft {
                task_date: day_after(today, day),
                description: format!(
                    "Study {} for {} hours - Chapter {}",
                    subjects[day_idx % count],
                    params.daily_hours,
                    day_idx / count + 1
                ),
                requires_commit: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sp_core::enums::Difficulty;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn descriptions(target: &str, days: u32) -> Vec<String> {
        let today = date(2026, 10, 19);
        let params = PlanParams {
            target,
            deadline: day_after(today, days),
            daily_hours: 2,
            difficulty: Difficulty::Moderate,
        };
        generate(&params, today)
            .into_iter()
            .map(|d| d.description)
            .collect()
    }

    #[test]
    fn round_robin_with_chapters() {
        assert_eq!(
            descriptions("Math, Physics ,Chemistry", 4),
            vec![
                "Study Math for 2 hours - Chapter 1",
                "Study Physics for 2 hours - Chapter 1",
                "Study Chemistry for 2 hours - Chapter 1",
                "Study Math for 2 hours - Chapter 2",
            ]
        );
    }

    #[test]
    fn single_subject_advances_chapter_daily() {
        assert_eq!(
            descriptions("History", 3),
            vec![
                "Study History for 2 hours - Chapter 1",
                "Study History for 2 hours - Chapter 2",
                "Study History for 2 hours - Chapter 3",
            ]
        );
    }

    #[test]
    fn empty_target_keeps_one_blank_subject() {
        assert_eq!(
            descriptions("", 1),
            vec!["Study  for 2 hours - Chapter 1"]
        );
    }

    #[test]
    fn one_task_per_day_in_order() {
        let today = date(2026, 10, 19);
        let params = PlanParams {
            target: "Math",
            deadline: date(2026, 11, 2),
            daily_hours: 1,
            difficulty: Difficulty::Hard,
        };
        let drafts = generate(&params, today);
        assert_eq!(drafts.len(), 14);
        for (i, draft) in drafts.iter().enumerate() {
            assert_eq!((draft.task_date - today).num_days(), i as i64);
        }
    }

    #[test]
    fn past_deadline_yields_nothing() {
        let params = PlanParams {
            target: "Math",
            deadline: date(2026, 10, 18),
            daily_hours: 1,
            difficulty: Difficulty::Easy,
        };
        assert!(generate(&params, date(2026, 10, 19)).is_empty());
    }
}
