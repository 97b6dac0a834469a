use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, PlanTrack};

/// A user's goal: a target, a deadline, and the cadence settings used to
/// generate its tasks.
///
/// `target` is a repository name (`owner/repo`) on the commit track and a
/// comma-separated subject list on the subject track.
///
/// `completion_percentage` is set manually. It is not derived from task
/// status; see `sp_plan::analysis::derived_completion` for the computed view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPlan {
    pub id: i64,
    pub user_id: i64,
    pub target: String,
    pub deadline: NaiveDate,
    pub difficulty: Difficulty,
    pub daily_hours: u32,
    pub track: PlanTrack,
    pub completion_percentage: u8,
    pub created_at: DateTime<Utc>,
}

/// A validated plan before it is persisted. Starts at 0% completion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanDraft {
    pub user_id: i64,
    pub target: String,
    pub deadline: NaiveDate,
    pub difficulty: Difficulty,
    pub daily_hours: u32,
    pub track: PlanTrack,
}
