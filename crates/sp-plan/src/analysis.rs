//! Progress analysis over stored plans, tasks, and activity snapshots.

use chrono::{Days, NaiveDate};
use sp_core::dates::days_between;
use sp_core::entities::{ActivitySnapshot, StudyPlan, StudyTask};
use sp_core::enums::{CompletionEstimate, TaskStatus};
use sp_core::responses::DashboardStats;

/// Length of the trailing window commits are measured against.
pub const CONSISTENCY_WINDOW_DAYS: u32 = 30;

/// Summarize a user's plans, snapshots, and today's tasks.
#[must_use]
pub fn dashboard_stats(
    plans: &[StudyPlan],
    snapshots: &[ActivitySnapshot],
    today_tasks: &[StudyTask],
    today: NaiveDate,
) -> DashboardStats {
    let overall_progress = if plans.is_empty() {
        0
    } else {
        let total: u32 = plans
            .iter()
            .map(|p| u32::from(p.completion_percentage))
            .sum();
        total / u32::try_from(plans.len()).unwrap_or(u32::MAX)
    };

    let nearest_deadline = plans.iter().map(|p| p.deadline).min();

    DashboardStats {
        overall_progress,
        commit_streak: snapshots.iter().map(|s| s.streak_count).max().unwrap_or(0),
        today_tasks_count: today_tasks.len(),
        pending_today_tasks: today_tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count(),
        nearest_deadline,
        days_remaining: nearest_deadline.map(|d| days_between(today, d).max(0)),
    }
}

/// Commits in the snapshot as a share of the 30-day window, capped at 100.
///
/// No snapshot, or one with zero commits, scores 0.
#[must_use]
pub fn commit_consistency(snapshot: Option<&ActivitySnapshot>) -> u32 {
    match snapshot {
        Some(s) if s.commit_count > 0 => {
            (s.commit_count.saturating_mul(100) / CONSISTENCY_WINDOW_DAYS).min(100)
        }
        _ => 0,
    }
}

/// Rough forecast of whether the plan finishes on time.
///
/// Average commits per day since the start of the 30-day window before the
/// deadline are compared against half and a quarter of the daily hours.
#[must_use]
pub fn completion_estimate(
    plan: &StudyPlan,
    snapshot: Option<&ActivitySnapshot>,
    today: NaiveDate,
) -> CompletionEstimate {
    let commits = match snapshot {
        Some(s) if s.commit_count > 0 => i64::from(s.commit_count),
        _ => return CompletionEstimate::NotStarted,
    };
    if days_between(today, plan.deadline) <= 0 {
        return CompletionEstimate::Overdue;
    }

    let window_start = plan
        .deadline
        .checked_sub_days(Days::new(u64::from(CONSISTENCY_WINDOW_DAYS)))
        .unwrap_or(NaiveDate::MIN);
    let elapsed = days_between(window_start, today).max(1);
    let per_day = commits / elapsed;
    let hours = i64::from(plan.daily_hours);

    if per_day >= hours / 2 {
        CompletionEstimate::OnTrack
    } else if per_day >= hours / 4 {
        CompletionEstimate::BehindSchedule
    } else {
        CompletionEstimate::AtRisk
    }
}

/// Completed tasks as a percentage of all tasks (0 when there are none).
///
/// Display only. The stored completion percentage is set by hand.
#[must_use]
pub fn derived_completion(tasks: &[StudyTask]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    u8::try_from(completed * 100 / tasks.len()).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sp_core::enums::{Difficulty, PlanTrack};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan(deadline: NaiveDate, completion: u8, hours: u32) -> StudyPlan {
        StudyPlan {
            id: 1,
            user_id: 1,
            target: "octo/hello".into(),
            deadline,
            difficulty: Difficulty::Moderate,
            daily_hours: hours,
            track: PlanTrack::Commit,
            completion_percentage: completion,
            created_at: Utc::now(),
        }
    }

    fn snapshot(commits: u32, streak: u32) -> ActivitySnapshot {
        ActivitySnapshot {
            id: 1,
            user_id: 1,
            repo_name: "octo/hello".into(),
            commit_count: commits,
            last_commit_date: Some(date(2026, 10, 18)),
            streak_count: streak,
            last_updated: Utc::now(),
        }
    }

    fn task(status: TaskStatus) -> StudyTask {
        StudyTask {
            id: 1,
            plan_id: 1,
            task_date: date(2026, 10, 19),
            description: "t".into(),
            requires_commit: true,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn dashboard_for_new_user_is_empty() {
        let stats = dashboard_stats(&[], &[], &[], date(2026, 10, 19));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn dashboard_aggregates() {
        let today = date(2026, 10, 19);
        let plans = vec![
            plan(date(2026, 12, 1), 50, 2),
            plan(date(2026, 10, 25), 25, 2),
        ];
        let snapshots = vec![snapshot(4, 1), snapshot(9, 0)];
        let tasks = vec![
            task(TaskStatus::Pending),
            task(TaskStatus::Completed),
            task(TaskStatus::Pending),
        ];

        let stats = dashboard_stats(&plans, &snapshots, &tasks, today);
        assert_eq!(stats.overall_progress, 37);
        assert_eq!(stats.commit_streak, 1);
        assert_eq!(stats.today_tasks_count, 3);
        assert_eq!(stats.pending_today_tasks, 2);
        assert_eq!(stats.nearest_deadline, Some(date(2026, 10, 25)));
        assert_eq!(stats.days_remaining, Some(6));
    }

    #[test]
    fn days_remaining_never_negative() {
        let plans = vec![plan(date(2026, 10, 1), 0, 2)];
        let stats = dashboard_stats(&plans, &[], &[], date(2026, 10, 19));
        assert_eq!(stats.days_remaining, Some(0));
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(0), 0)]
    #[case(Some(3), 10)]
    #[case(Some(15), 50)]
    #[case(Some(45), 100)]
    fn consistency_scores(#[case] commits: Option<u32>, #[case] expected: u32) {
        let snap = commits.map(|c| snapshot(c, 0));
        assert_eq!(commit_consistency(snap.as_ref()), expected);
    }

    #[test]
    fn estimate_not_started_without_commits() {
        let p = plan(date(2026, 11, 1), 0, 4);
        assert_eq!(
            completion_estimate(&p, None, date(2026, 10, 19)),
            CompletionEstimate::NotStarted
        );
        assert_eq!(
            completion_estimate(&p, Some(&snapshot(0, 0)), date(2026, 10, 19)),
            CompletionEstimate::NotStarted
        );
    }

    #[test]
    fn estimate_overdue_on_deadline_day() {
        let p = plan(date(2026, 10, 19), 0, 4);
        assert_eq!(
            completion_estimate(&p, Some(&snapshot(5, 0)), date(2026, 10, 19)),
            CompletionEstimate::Overdue
        );
    }

    // Deadline 2026-11-08: window starts 2026-10-09, ten days before today.
    #[rstest]
    #[case(40, 8, CompletionEstimate::OnTrack)]
    #[case(20, 8, CompletionEstimate::BehindSchedule)]
    #[case(9, 8, CompletionEstimate::AtRisk)]
    #[case(1, 1, CompletionEstimate::OnTrack)]
    fn estimate_by_commit_rate(
        #[case] commits: u32,
        #[case] hours: u32,
        #[case] expected: CompletionEstimate,
    ) {
        let p = plan(date(2026, 11, 8), 0, hours);
        assert_eq!(
            completion_estimate(&p, Some(&snapshot(commits, 0)), date(2026, 10, 19)),
            expected
        );
    }

    #[test]
    fn estimate_before_window_uses_one_day() {
        // Window has not started yet: elapsed clamps to 1.
        let p = plan(date(2027, 1, 1), 0, 4);
        assert_eq!(
            completion_estimate(&p, Some(&snapshot(2, 0)), date(2026, 10, 19)),
            CompletionEstimate::OnTrack
        );
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![TaskStatus::Completed, TaskStatus::Pending, TaskStatus::Missed], 33)]
    #[case(vec![TaskStatus::Completed, TaskStatus::Completed], 100)]
    fn derived_completion_share(#[case] statuses: Vec<TaskStatus>, #[case] expected: u8) {
        let tasks: Vec<StudyTask> = statuses.into_iter().map(task).collect();
        assert_eq!(derived_completion(&tasks), expected);
    }
}
