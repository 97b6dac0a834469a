//! GitHub activity snapshot repository.
//!
//! One row per `(user_id, repo_name)`. A refresh overwrites the previous
//! snapshot in place.

use sp_core::entities::{ActivitySnapshot, SnapshotDraft};

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, get_opt_string, get_u32, parse_datetime, parse_optional_date,
};
use crate::service::PlannerService;

const SELECT_COLS: &str =
    "id, user_id, repo_name, commit_count, last_commit_date, streak_count, last_updated";

fn row_to_snapshot(row: &libsql::Row) -> Result<ActivitySnapshot, DatabaseError> {
    Ok(ActivitySnapshot {
        id: row.get::<i64>(0)?,
        user_id: row.get::<i64>(1)?,
        repo_name: row.get::<String>(2)?,
        commit_count: get_u32(row, 3)?,
        last_commit_date: parse_optional_date(get_opt_string(row, 4)?.as_deref())?,
        streak_count: get_u32(row, 5)?,
        last_updated: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl PlannerService {
    /// Insert or replace the snapshot for a user's repository.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the upsert fails.
    pub async fn upsert_snapshot(
        &self,
        draft: &SnapshotDraft,
    ) -> Result<ActivitySnapshot, DatabaseError> {
        let now = chrono::Utc::now();
        let sql = format!(
            "INSERT INTO github_activity (user_id, repo_name, commit_count, last_commit_date, streak_count, last_updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(user_id, repo_name) DO UPDATE SET
                commit_count = excluded.commit_count,
                last_commit_date = excluded.last_commit_date,
                streak_count = excluded.streak_count,
                last_updated = excluded.last_updated
             RETURNING {SELECT_COLS}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![
                    draft.user_id,
                    draft.repo_name.as_str(),
                    i64::from(draft.commit_count),
                    draft.last_commit_date.map(format_date),
                    i64::from(draft.streak_count),
                    now.to_rfc3339(),
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let snapshot = row_to_snapshot(&row)?;
        tracing::debug!(
            user_id = snapshot.user_id,
            repo = %snapshot.repo_name,
            commits = snapshot.commit_count,
            "activity snapshot stored"
        );
        Ok(snapshot)
    }

    /// Snapshot for one repository, if it has been refreshed before.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_snapshot(
        &self,
        user_id: i64,
        repo_name: &str,
    ) -> Result<Option<ActivitySnapshot>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM github_activity WHERE user_id = ?1 AND repo_name = ?2"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![user_id, repo_name])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_snapshot(&row)?)),
            None => Ok(None),
        }
    }

    /// All snapshots of a user, most recently refreshed first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_snapshots_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ActivitySnapshot>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM github_activity WHERE user_id = ?1
             ORDER BY last_updated DESC, id DESC"
        );
        let mut rows = self.db().conn().query(&sql, [user_id]).await?;
        let mut snapshots = Vec::new();
        while let Some(row) = rows.next().await? {
            snapshots.push(row_to_snapshot(&row)?);
        }
        Ok(snapshots)
    }
}
