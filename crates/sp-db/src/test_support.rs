//! Shared test utilities for sp-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;
    use sp_core::entities::{NewUser, PlanDraft, StudyPlan, StudyTask, TaskDraft, User};
    use sp_core::enums::{Difficulty, OAuthProvider, PlanTrack, UserRole};

    use crate::PlannerDb;
    use crate::repos::task::insert_tasks;
    use crate::service::PlannerService;

    /// Create an in-memory `PlannerService` with the schema applied.
    pub async fn test_service() -> PlannerService {
        let db = PlannerDb::open_local(":memory:").await.unwrap();
        PlannerService::from_db(db)
    }

    pub fn new_user(email: &str, role: UserRole) -> NewUser {
        NewUser {
            name: "Ada".into(),
            email: email.into(),
            role,
            oauth_provider: match role {
                UserRole::It => OAuthProvider::Github,
                UserRole::Normal => OAuthProvider::Google,
            },
            external_username: None,
            access_token: Some("tok".into()),
            avatar_url: None,
        }
    }

    /// Insert an IT-track user and return it.
    pub async fn seed_user(svc: &PlannerService, email: &str) -> User {
        svc.upsert_user(&new_user(email, UserRole::It)).await.unwrap()
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A commit-track draft for `octo/repo`, moderate, four hours a day.
    pub fn plan_draft(user_id: i64, deadline: NaiveDate) -> PlanDraft {
        PlanDraft {
            user_id,
            target: "octo/repo".into(),
            deadline,
            difficulty: Difficulty::Moderate,
            daily_hours: 4,
            track: PlanTrack::Commit,
        }
    }

    pub async fn seed_plan(svc: &PlannerService, user_id: i64, deadline: NaiveDate) -> StudyPlan {
        svc.create_plan(&plan_draft(user_id, deadline)).await.unwrap()
    }

    pub async fn seed_tasks(svc: &PlannerService, plan_id: i64, drafts: &[TaskDraft]) -> Vec<StudyTask> {
        insert_tasks(svc.db().conn(), plan_id, drafts).await.unwrap()
    }
}
