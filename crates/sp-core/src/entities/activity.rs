use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityStatus;

/// Cached summary of GitHub commit activity for a (user, repository) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivitySnapshot {
    pub id: i64,
    pub user_id: i64,
    pub repo_name: String,
    pub commit_count: u32,
    pub last_commit_date: Option<NaiveDate>,
    pub streak_count: u32,
    pub last_updated: DateTime<Utc>,
}

impl ActivitySnapshot {
    /// Freshness of the last commit relative to `today`.
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> ActivityStatus {
        ActivityStatus::from_last_commit(self.last_commit_date, today)
    }
}

/// Freshly fetched activity, ready to upsert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotDraft {
    pub user_id: i64,
    pub repo_name: String,
    pub commit_count: u32,
    pub last_commit_date: Option<NaiveDate>,
    pub streak_count: u32,
}
