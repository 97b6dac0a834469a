//! Commit track: one coding task per day, plus milestone check-ins.
//!
//! Each day's base text rotates through a ten-entry table. Plans with four
//! or more daily hours draw from the algorithm-practice table, lighter plans
//! from the generic project table. The intensity tier wraps the base text,
//! and milestone days get a second, commit-free task after the main one.

use chrono::NaiveDate;
use sp_core::entities::TaskDraft;

use crate::{PlanParams, day_after, days_until};

pub const GENERIC_TASKS: [&str; 10] = [
    "Implement core functionality",
    "Write unit tests",
    "Fix bugs and optimize code",
    "Add documentation",
    "Refactor code",
    "Implement new feature",
    "Review pull requests",
    "Update dependencies",
    "Improve performance",
    "Add error handling",
];

pub const ALGORITHM_TASKS: [&str; 10] = [
    "Implement Binary Search algorithm",
    "Solve Array manipulation problems",
    "Work on String algorithms",
    "Practice Dynamic Programming",
    "Implement Sorting algorithms",
    "Work on Graph algorithms",
    "Practice Tree traversals",
    "Implement Stack and Queue operations",
    "Work on Hash Table problems",
    "Practice Recursion problems",
];

pub const FINAL_MILESTONE: &str =
    "🎯 FINAL MILESTONE: Complete final testing and prepare for submission";
pub const MID_PROJECT: &str =
    "⭐ MID-PROJECT: Review all completed features and plan remaining work";
pub const WEEKLY_CHECKPOINT: &str =
    "📊 WEEKLY CHECKPOINT: Evaluate progress and adjust schedule if needed";
pub const CHECKPOINT: &str =
    "✅ CHECKPOINT: Verify today's commits and update project documentation";

/// Daily hours at which the algorithm table replaces the generic one.
const ALGORITHM_HOURS: u32 = 4;

/// Generate the commit-track schedule for `[today, deadline)`.
///
/// Returns an empty schedule when the deadline is not after `today`.
#[must_use]
pub fn generate(params: &PlanParams<'_>, today: NaiveDate) -> Vec<TaskDraft> {
    let Some(total_days) = days_until(today, params.deadline) else {
        return Vec::new();
    };

    let factor = params.difficulty.factor();
    let frequency = commit_frequency(params.daily_hours);
    let mut drafts = Vec::with_capacity(total_days as usize + 5);

    for day in 0..total_days {
        let task_date = day_after(today, day);
        drafts.push(TaskDraft {
            task_date,
            description: task_description(day, params.daily_hours, factor),
            requires_commit: day % frequency == 0,
        });

        if is_milestone_day(day, total_days) {
            drafts.push(TaskDraft {
                task_date,
                description: milestone_description(day, total_days).to_string(),
                requires_commit: false,
            });
        }
    }
    drafts
}

/// Main task text for a day: tiered base text with the time estimate suffix.
#[must_use]
pub fn task_description(day: u32, daily_hours: u32, difficulty_factor: u32) -> String {
    let table = if daily_hours >= ALGORITHM_HOURS {
        &ALGORITHM_TASKS
    } else {
        &GENERIC_TASKS
    };
    let base = table[day as usize % table.len()];

    let tiered = match difficulty_factor.saturating_mul(daily_hours) {
        i if i > 6 => format!("Advanced: {base} with optimizations"),
        i if i > 3 => format!("Standard: {base}"),
        _ => format!("Basic: {base}"),
    };
    format!("{tiered} (Est. time: {daily_hours} hours)")
}

/// Every how many days a commit is required: `max(1, 3 - hours / 3)`.
#[must_use]
pub fn commit_frequency(daily_hours: u32) -> u32 {
    3u32.saturating_sub(daily_hours / 3).max(1)
}

/// Day 0, the quarter marks (integer division), and the last day.
#[must_use]
pub const fn is_milestone_day(day: u32, total_days: u32) -> bool {
    day == 0
        || day == total_days / 4
        || day == total_days / 2
        || day == (total_days * 3) / 4
        || day == total_days - 1
}

/// Milestone text keyed by the share of the plan elapsed after `day`.
#[must_use]
pub fn milestone_description(day: u32, total_days: u32) -> &'static str {
    // (day + 1) / total * 100 >= threshold, kept in integers.
    let elapsed = (u64::from(day) + 1) * 100;
    let total = u64::from(total_days);
    if elapsed >= 75 * total {
        FINAL_MILESTONE
    } else if elapsed >= 50 * total {
        MID_PROJECT
    } else if elapsed >= 25 * total {
        WEEKLY_CHECKPOINT
    } else {
        CHECKPOINT
    }
}
