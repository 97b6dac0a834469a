//! Track dispatch.
//!
//! A plan's [`PlanTrack`] is fixed when the plan is created. Generation and
//! rescheduling both dispatch on that stored track, never on the owner's
//! current role.

use chrono::NaiveDate;
use sp_core::entities::{Reschedule, StudyTask, TaskDraft};
use sp_core::enums::PlanTrack;

use crate::PlanParams;
use crate::redistribute::redistribute;
use crate::{commit_track, subject_track};

/// Schedule generation and rescheduling for one plan track.
pub trait Strategy {
    /// Build the full task schedule, in persistence order.
    fn generate(self, params: &PlanParams<'_>, today: NaiveDate) -> Vec<TaskDraft>;

    /// New dates for pending tasks after a check-in.
    fn adjust(
        self,
        tasks: &[StudyTask],
        today: NaiveDate,
        deadline: NaiveDate,
        commit_missed: bool,
    ) -> Vec<Reschedule>;
}

impl Strategy for PlanTrack {
    fn generate(self, params: &PlanParams<'_>, today: NaiveDate) -> Vec<TaskDraft> {
        let drafts = match self {
            Self::Commit => commit_track::generate(params, today),
            Self::Subject => subject_track::generate(params, today),
        };
        tracing::debug!(track = %self, count = drafts.len(), "tasks generated");
        drafts
    }

    /// Only the commit track reschedules. The subject track returns no moves.
    fn adjust(
        self,
        tasks: &[StudyTask],
        today: NaiveDate,
        deadline: NaiveDate,
        commit_missed: bool,
    ) -> Vec<Reschedule> {
        match self {
            Self::Commit => redistribute(tasks, today, deadline, commit_missed),
            Self::Subject => Vec::new(),
        }
    }
}
