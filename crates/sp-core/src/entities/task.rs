use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// One dated unit of work belonging to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyTask {
    pub id: i64,
    pub plan_id: i64,
    pub task_date: NaiveDate,
    pub description: String,
    /// Whether the day's work must be proven by an external commit.
    pub requires_commit: bool,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// A generated task before it is persisted. Always starts `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_date: NaiveDate,
    pub description: String,
    pub requires_commit: bool,
}

/// New date and description for a pending task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reschedule {
    pub task_id: i64,
    pub task_date: NaiveDate,
    pub description: String,
}
