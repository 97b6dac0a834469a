//! # sp-plan
//!
//! Turns a study goal into a dated task schedule and reads progress back out.
//!
//! Everything here is a pure function of its inputs. The current date is
//! always passed in as `today`; nothing reads the clock.
//!
//! - [`strategy`]: dispatches generation and rescheduling on a plan's stored track
//! - [`commit_track`]: daily coding tasks with intensity tiers and milestones
//! - [`subject_track`]: round-robin chapter reading across comma-separated subjects
//! - [`redistribute`]: spreads pending tasks over the days left before the deadline
//! - [`analysis`]: dashboard stats, commit consistency, completion estimate

pub mod analysis;
pub mod commit_track;
pub mod redistribute;
pub mod strategy;
pub mod subject_track;

use chrono::NaiveDate;
use sp_core::entities::PlanDraft;
use sp_core::enums::Difficulty;

/// Generator input: the parts of a plan that shape its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanParams<'a> {
    pub target: &'a str,
    pub deadline: NaiveDate,
    pub daily_hours: u32,
    pub difficulty: Difficulty,
}

impl<'a> From<&'a PlanDraft> for PlanParams<'a> {
    fn from(draft: &'a PlanDraft) -> Self {
        Self {
            target: &draft.target,
            deadline: draft.deadline,
            daily_hours: draft.daily_hours,
            difficulty: draft.difficulty,
        }
    }
}

/// Whole days from `today` until `deadline`, or `None` when the deadline is
/// today or already past.
pub(crate) fn days_until(today: NaiveDate, deadline: NaiveDate) -> Option<u32> {
    let days = sp_core::dates::days_between(today, deadline);
    if days <= 0 {
        return None;
    }
    u32::try_from(days).ok()
}

/// `today + offset` days, saturating at the last representable date.
pub(crate) fn day_after(today: NaiveDate, offset: u32) -> NaiveDate {
    today
        .checked_add_days(chrono::Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MAX)
}
