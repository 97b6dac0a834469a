use anyhow::Context;
use sp_auth::AuthError;
use sp_core::entities::{StudyPlan, User};
use sp_core::validation::require_email;

use crate::context::AppContext;

/// Where the signed-in identity came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentitySource {
    /// `session.user_email` in config or `STUDYPLAN_SESSION__USER_EMAIL`.
    Config,
    /// The session file written by `spl auth login`.
    SessionFile,
}

impl IdentitySource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::SessionFile => "session_file",
        }
    }
}

/// Resolve the signed-in user, if any.
///
/// A configured email wins over the session file and must be well formed.
/// A session whose user row is gone (or whose email no longer matches)
/// counts as signed out.
pub async fn current_user(ctx: &AppContext) -> anyhow::Result<Option<(User, IdentitySource)>> {
    if let Some(email) = ctx.config.session.user_email() {
        require_email(email).context("invalid session.user_email")?;
        let user = ctx
            .service
            .find_user_by_email(email)
            .await
            .context("failed to look up configured user")?;
        return Ok(user.map(|u| (u, IdentitySource::Config)));
    }

    let Some(session) = sp_auth::session_store::load() else {
        return Ok(None);
    };
    match ctx.service.find_user_by_email(&session.email).await? {
        Some(user) if user.id == session.user_id => Ok(Some((user, IdentitySource::SessionFile))),
        _ => {
            tracing::warn!(user_id = session.user_id, "session refers to an unknown user");
            Ok(None)
        }
    }
}

/// Like [`current_user`], failing with a sign-in hint when nobody is signed in.
pub async fn require_user(ctx: &AppContext) -> anyhow::Result<User> {
    current_user(ctx)
        .await?
        .map(|(user, _)| user)
        .ok_or_else(|| AuthError::NotAuthenticated.into())
}

/// Load a plan, treating another user's plan as missing.
pub async fn owned_plan(ctx: &AppContext, user: &User, plan_id: i64) -> anyhow::Result<StudyPlan> {
    let plan = ctx
        .service
        .get_plan(plan_id)
        .await
        .with_context(|| format!("plan {plan_id} not found"))?;
    if plan.user_id != user.id {
        anyhow::bail!("plan {plan_id} not found");
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use sp_core::entities::PlanDraft;
    use sp_core::enums::{PlanTrack, UserRole};

    use super::*;
    use crate::commands::shared::test_context::{signed_in, test_context};

    #[tokio::test]
    async fn configured_email_resolves_user() {
        let (ctx, user) = signed_in(UserRole::It).await;
        let (found, source) = current_user(&ctx).await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(source, IdentitySource::Config);
    }

    #[tokio::test]
    async fn unknown_configured_email_is_signed_out() {
        let mut ctx = test_context().await;
        ctx.config.session.user_email = "ghost@example.com".into();
        assert!(current_user(&ctx).await.unwrap().is_none());
        let err = require_user(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("spl auth login"));
    }

    #[tokio::test]
    async fn malformed_configured_email_is_rejected() {
        let mut ctx = test_context().await;
        ctx.config.session.user_email = "not-an-email".into();
        let err = current_user(&ctx).await.unwrap_err();
        assert!(format!("{err:#}").contains("invalid session.user_email"));
    }

    #[tokio::test]
    async fn other_users_plan_is_not_found() {
        let (ctx, owner) = signed_in(UserRole::Normal).await;
        let plan = ctx
            .service
            .create_plan(&PlanDraft {
                user_id: owner.id,
                target: "Math".into(),
                deadline: ctx.today.succ_opt().unwrap(),
                difficulty: Default::default(),
                daily_hours: 2,
                track: PlanTrack::Subject,
            })
            .await
            .unwrap();

        let stranger = ctx
            .service
            .upsert_user(&crate::commands::shared::test_context::new_user(
                "other@example.com",
                UserRole::Normal,
            ))
            .await
            .unwrap();

        assert!(owned_plan(&ctx, &owner, plan.id).await.is_ok());
        let err = owned_plan(&ctx, &stranger, plan.id).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
