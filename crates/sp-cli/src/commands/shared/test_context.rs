use chrono::NaiveDate;
use sp_config::PlannerConfig;
use sp_core::entities::{NewUser, User};
use sp_core::enums::{OAuthProvider, UserRole};
use sp_db::service::PlannerService;

use crate::context::AppContext;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

/// In-memory context with an empty config anchored at [`today`].
pub async fn test_context() -> AppContext {
    AppContext {
        service: PlannerService::new_local(":memory:").await.unwrap(),
        config: PlannerConfig::default(),
        today: today(),
    }
}

pub fn new_user(email: &str, role: UserRole) -> NewUser {
    let provider = match role {
        UserRole::It => OAuthProvider::Github,
        UserRole::Normal => OAuthProvider::Google,
    };
    NewUser {
        name: "Test Student".into(),
        email: email.into(),
        role,
        oauth_provider: provider,
        external_username: (role == UserRole::It).then(|| "octo".to_string()),
        access_token: Some("tok".into()),
        avatar_url: None,
    }
}

/// Context whose configured session email names a freshly stored user.
pub async fn signed_in(role: UserRole) -> (AppContext, User) {
    let mut ctx = test_context().await;
    let user = ctx
        .service
        .upsert_user(&new_user("student@example.com", role))
        .await
        .unwrap();
    ctx.config.session.user_email = user.email.clone();
    (ctx, user)
}
