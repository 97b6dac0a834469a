//! CLI response types returned as JSON by `spl` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `spl plan create`, `spl plan show`, `spl plan adjust`, `spl dashboard`,
//! and `spl activity list`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ActivitySnapshot, StudyPlan, StudyTask};
use crate::enums::{ActivityStatus, CompletionEstimate};

/// Response from `spl plan create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanCreateResponse {
    pub plan: StudyPlan,
    pub task_count: usize,
}

/// Response from `spl plan show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanDetailResponse {
    pub plan: StudyPlan,
    pub tasks: Vec<StudyTask>,
    /// Completed share of all tasks. Display only; never written back.
    pub derived_completion: u8,
    pub days_remaining: i64,
    pub estimate: Option<CompletionEstimate>,
}

/// Response from `spl plan adjust`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdjustResponse {
    pub plan_id: i64,
    pub adjusted: usize,
    pub commit_missed: bool,
}

/// Response from `spl dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    /// Integer mean of the stored completion percentages.
    pub overall_progress: u32,
    pub commit_streak: u32,
    pub today_tasks_count: usize,
    pub pending_today_tasks: usize,
    pub nearest_deadline: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

/// One row of `spl activity list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityView {
    pub snapshot: ActivitySnapshot,
    pub status: ActivityStatus,
    pub last_commit: String,
    pub consistency: Option<u32>,
}

/// Response from `spl activity refresh`: the stored snapshot plus the
/// commit metrics of the page that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityRefreshResponse {
    pub activity: ActivityView,
    /// Commits dated today or in the previous seven days.
    pub commits_last_week: u32,
    /// Distinct calendar days with at least one commit.
    pub active_days: u32,
    /// Consecutive commits more than two days apart.
    pub commit_gaps: u32,
}
