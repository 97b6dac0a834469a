//! Study plan repository (`goals` table).

use sp_core::entities::{PlanDraft, StudyPlan, StudyTask, TaskDraft};

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_u32, parse_date, parse_datetime, parse_enum};
use crate::repos::task::insert_tasks;
use crate::service::PlannerService;

const SELECT_COLS: &str = "id, user_id, repository_name, deadline, difficulty, daily_hours, \
                           track, completion_percentage, created_at";

fn row_to_plan(row: &libsql::Row) -> Result<StudyPlan, DatabaseError> {
    let completion = get_u32(row, 7)?;
    Ok(StudyPlan {
        id: row.get::<i64>(0)?,
        user_id: row.get::<i64>(1)?,
        target: row.get::<String>(2)?,
        deadline: parse_date(&row.get::<String>(3)?)?,
        difficulty: parse_enum(&row.get::<String>(4)?)?,
        daily_hours: get_u32(row, 5)?,
        track: parse_enum(&row.get::<String>(6)?)?,
        completion_percentage: u8::try_from(completion).map_err(|_| {
            DatabaseError::Query(format!("completion_percentage out of range: {completion}"))
        })?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// Insert one plan row on `conn`, which may be an open transaction.
async fn insert_plan(conn: &libsql::Connection, draft: &PlanDraft) -> Result<StudyPlan, DatabaseError> {
    let sql = format!(
        "INSERT INTO goals (user_id, repository_name, deadline, difficulty, daily_hours, track, completion_percentage, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)
         RETURNING {SELECT_COLS}"
    );
    let mut rows = conn
        .query(
            &sql,
            libsql::params![
                draft.user_id,
                draft.target.as_str(),
                format_date(draft.deadline),
                draft.difficulty.as_str(),
                i64::from(draft.daily_hours),
                draft.track.as_str(),
                chrono::Utc::now().to_rfc3339(),
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_plan(&row)
}

impl PlannerService {
    /// Create a plan with 0% completion and no tasks.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails (e.g., unknown `user_id`).
    pub async fn create_plan(&self, draft: &PlanDraft) -> Result<StudyPlan, DatabaseError> {
        let plan = insert_plan(self.db().conn(), draft).await?;
        tracing::debug!(plan_id = plan.id, user_id = draft.user_id, target = %draft.target, "plan created");
        Ok(plan)
    }

    /// Create a plan and its generated tasks in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails. Neither the plan nor any
    /// task is written in that case.
    pub async fn create_plan_with_tasks(
        &self,
        draft: &PlanDraft,
        tasks: &[TaskDraft],
    ) -> Result<(StudyPlan, Vec<StudyTask>), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let plan = insert_plan(&tx, draft).await?;
        let saved = insert_tasks(&tx, plan.id, tasks).await?;
        tx.commit().await?;

        tracing::debug!(
            plan_id = plan.id,
            user_id = draft.user_id,
            track = %draft.track,
            tasks = saved.len(),
            "plan created with tasks"
        );
        Ok((plan, saved))
    }

    /// Get a plan by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no plan has this id.
    pub async fn get_plan(&self, id: i64) -> Result<StudyPlan, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM goals WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_plan(&row)
    }

    /// List a user's plans, nearest deadline first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_plans_for_user(&self, user_id: i64) -> Result<Vec<StudyPlan>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM goals WHERE user_id = ?1 ORDER BY deadline ASC, id ASC"
        );
        let mut rows = self.db().conn().query(&sql, [user_id]).await?;
        let mut plans = Vec::new();
        while let Some(row) = rows.next().await? {
            plans.push(row_to_plan(&row)?);
        }
        Ok(plans)
    }

    /// Set the stored completion percentage (0..=100, validated by the caller
    /// and by a CHECK constraint).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the plan does not exist.
    pub async fn update_completion(
        &self,
        plan_id: i64,
        percentage: u8,
    ) -> Result<StudyPlan, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE goals SET completion_percentage = ?1 WHERE id = ?2",
                libsql::params![i64::from(percentage), plan_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(plan_id, percentage, "plan completion updated");
        self.get_plan(plan_id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sp_core::entities::{PlanDraft, TaskDraft};
    use sp_core::enums::{Difficulty, PlanTrack};

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{date, plan_draft, seed_plan, seed_user, test_service};

    #[tokio::test]
    async fn create_plan_roundtrip() {
        let svc = test_service().await;
        let user = seed_user(&svc, "ada@example.com").await;

        let draft = PlanDraft {
            target: "Math, Physics".into(),
            difficulty: Difficulty::Hard,
            daily_hours: 3,
            track: PlanTrack::Subject,
            ..plan_draft(user.id, date(2026, 12, 1))
        };
        let plan = svc.create_plan(&draft).await.unwrap();
        assert_eq!(plan.completion_percentage, 0);

        let fetched = svc.get_plan(plan.id).await.unwrap();
        assert_eq!(fetched, plan);
        assert_eq!(fetched.difficulty, Difficulty::Hard);
        assert_eq!(fetched.daily_hours, 3);
        assert_eq!(fetched.track, PlanTrack::Subject);
    }

    #[tokio::test]
    async fn create_with_tasks_writes_both() {
        let svc = test_service().await;
        let user = seed_user(&svc, "ada@example.com").await;
        let tasks = [TaskDraft {
            task_date: date(2026, 11, 1),
            description: "Day 1: code".into(),
            requires_commit: true,
        }];

        let (plan, saved) = svc
            .create_plan_with_tasks(&plan_draft(user.id, date(2026, 11, 30)), &tasks)
            .await
            .unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].plan_id, plan.id);
        assert_eq!(svc.list_tasks_for_plan(plan.id, None).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn failed_task_insert_leaves_no_plan() {
        let svc = test_service().await;
        let user = seed_user(&svc, "ada@example.com").await;
        let tasks = [
            TaskDraft {
                task_date: date(2026, 11, 1),
                description: "Day 1: code".into(),
                requires_commit: true,
            },
            TaskDraft {
                task_date: date(2026, 11, 2),
                description: String::new(),
                requires_commit: true,
            },
        ];

        let result = svc
            .create_plan_with_tasks(&plan_draft(user.id, date(2026, 11, 30)), &tasks)
            .await;
        assert!(result.is_err());
        assert!(svc.list_plans_for_user(user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_deadline() {
        let svc = test_service().await;
        let user = seed_user(&svc, "ada@example.com").await;
        let later = seed_plan(&svc, user.id, date(2027, 1, 1)).await;
        let sooner = seed_plan(&svc, user.id, date(2026, 11, 1)).await;

        let ids: Vec<i64> = svc
            .list_plans_for_user(user.id)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![sooner.id, later.id]);
    }

    #[tokio::test]
    async fn list_is_scoped_to_user() {
        let svc = test_service().await;
        let ada = seed_user(&svc, "ada@example.com").await;
        let grace = seed_user(&svc, "grace@example.com").await;
        seed_plan(&svc, ada.id, date(2027, 1, 1)).await;

        assert!(svc.list_plans_for_user(grace.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_completion_persists() {
        let svc = test_service().await;
        let user = seed_user(&svc, "ada@example.com").await;
        let plan = seed_plan(&svc, user.id, date(2027, 1, 1)).await;

        let updated = svc.update_completion(plan.id, 55).await.unwrap();
        assert_eq!(updated.completion_percentage, 55);
    }

    #[tokio::test]
    async fn update_completion_unknown_plan() {
        let svc = test_service().await;
        assert!(matches!(
            svc.update_completion(99, 10).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn plan_requires_existing_user() {
        let svc = test_service().await;
        let result = svc.create_plan(&plan_draft(404, date(2027, 1, 1))).await;
        assert!(result.is_err());
    }
}
