//! Study task repository.
//!
//! Tasks are written in bulk when a plan is generated, then move through the
//! [`TaskStatus`] state machine one at a time. Rescheduling rewrites date and
//! description but never status, and applies a whole batch or nothing.

use chrono::NaiveDate;

use sp_core::entities::{Reschedule, StudyTask, TaskDraft};
use sp_core::enums::TaskStatus;
use sp_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_bool, parse_date, parse_datetime, parse_enum};
use crate::service::PlannerService;

const SELECT_COLS: &str = "t.id, t.goal_id, t.task_date, t.description, t.required_commit, \
                           t.status, t.created_at";

fn row_to_task(row: &libsql::Row) -> Result<StudyTask, DatabaseError> {
    Ok(StudyTask {
        id: row.get::<i64>(0)?,
        plan_id: row.get::<i64>(1)?,
        task_date: parse_date(&row.get::<String>(2)?)?,
        description: row.get::<String>(3)?,
        requires_commit: get_bool(row, 4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Insert `drafts` for `plan_id` on `conn`, in the order given, all
/// `pending`. `conn` may be an open transaction.
pub(crate) async fn insert_tasks(
    conn: &libsql::Connection,
    plan_id: i64,
    drafts: &[TaskDraft],
) -> Result<Vec<StudyTask>, DatabaseError> {
    let now = chrono::Utc::now().to_rfc3339();
    let sql = "INSERT INTO study_tasks (goal_id, task_date, description, required_commit, status, created_at)
               VALUES (?1, ?2, ?3, ?4, 'pending', ?5)
               RETURNING id, goal_id, task_date, description, required_commit, status, created_at";

    let mut saved = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let mut rows = conn
            .query(
                sql,
                libsql::params![
                    plan_id,
                    format_date(draft.task_date),
                    draft.description.as_str(),
                    i64::from(draft.requires_commit),
                    now.as_str(),
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        saved.push(row_to_task(&row)?);
    }
    Ok(saved)
}

impl PlannerService {
    /// Get a task by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn get_task(&self, id: i64) -> Result<StudyTask, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM study_tasks t WHERE t.id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// List tasks of a plan ordered by date (ties keep insertion order),
    /// optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tasks_for_plan(
        &self,
        plan_id: i64,
        status: Option<TaskStatus>,
    ) -> Result<Vec<StudyTask>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                let sql = format!(
                    "SELECT {SELECT_COLS} FROM study_tasks t
                     WHERE t.goal_id = ?1 AND t.status = ?2
                     ORDER BY t.task_date ASC, t.id ASC"
                );
                self.db()
                    .conn()
                    .query(&sql, libsql::params![plan_id, status.as_str()])
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {SELECT_COLS} FROM study_tasks t
                     WHERE t.goal_id = ?1
                     ORDER BY t.task_date ASC, t.id ASC"
                );
                self.db().conn().query(&sql, [plan_id]).await?
            }
        };
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// All tasks dated `date` across every plan of a user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tasks_on(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<StudyTask>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM study_tasks t
             JOIN goals g ON g.id = t.goal_id
             WHERE g.user_id = ?1 AND t.task_date = ?2
             ORDER BY g.deadline ASC, t.id ASC"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![user_id, format_date(date)])
            .await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Move a task to a new status.
    ///
    /// Validates the transition with [`TaskStatus::can_transition_to`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core(CoreError::InvalidTransition)` for an
    /// illegal transition, or `DatabaseError::NoResult` if the task is missing.
    pub async fn transition_task(
        &self,
        task_id: i64,
        new_status: TaskStatus,
    ) -> Result<StudyTask, DatabaseError> {
        let current = self.get_task(task_id).await?;
        if !current.status.can_transition_to(new_status) {
            return Err(CoreError::InvalidTransition {
                entity_type: "task".to_string(),
                id: task_id.to_string(),
                from: current.status.to_string(),
                to: new_status.to_string(),
            }
            .into());
        }

        self.db()
            .conn()
            .execute(
                "UPDATE study_tasks SET status = ?1 WHERE id = ?2",
                libsql::params![new_status.as_str(), task_id],
            )
            .await?;
        tracing::debug!(task_id, from = %current.status, to = %new_status, "task transitioned");

        Ok(StudyTask {
            status: new_status,
            ..current
        })
    }

    /// Rewrite date and description of every task in `moves` in a single
    /// transaction. Returns the number of tasks rewritten.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if any task does not exist. No task
    /// is rewritten in that case.
    pub async fn reschedule_tasks(&self, moves: &[Reschedule]) -> Result<usize, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        for mv in moves {
            let affected = tx
                .execute(
                    "UPDATE study_tasks SET task_date = ?1, description = ?2 WHERE id = ?3",
                    libsql::params![
                        format_date(mv.task_date),
                        mv.description.as_str(),
                        mv.task_id
                    ],
                )
                .await?;
            if affected == 0 {
                tracing::warn!(task_id = mv.task_id, "reschedule target missing, rolling back");
                return Err(DatabaseError::NoResult);
            }
        }
        tx.commit().await?;

        tracing::debug!(count = moves.len(), "tasks rescheduled");
        Ok(moves.len())
    }
}
