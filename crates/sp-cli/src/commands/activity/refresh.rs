use anyhow::Context;
use sp_core::entities::User;
use sp_core::responses::ActivityRefreshResponse;

use crate::cli::GlobalFlags;
use crate::commands::activity::{github_client, list::activity_view};
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl activity refresh`: fetch recent commits and upsert the snapshot.
pub async fn run(repo: &str, user: &User, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&refresh_activity(repo, user, ctx).await?, flags.format)
}

pub(crate) async fn refresh_activity(
    repo: &str,
    user: &User,
    ctx: &AppContext,
) -> anyhow::Result<ActivityRefreshResponse> {
    let client = github_client(user, ctx)?;
    let (draft, metrics) = client
        .fetch_snapshot(user.id, repo.trim(), ctx.today)
        .await
        .with_context(|| format!("failed to fetch activity for {repo}"))?;
    let snapshot = ctx.service.upsert_snapshot(&draft).await?;
    tracing::info!(
        repo = %snapshot.repo_name,
        commits = snapshot.commit_count,
        active_days = metrics.active_days,
        gaps = metrics.commit_gaps,
        "activity refreshed"
    );

    let plans = ctx.service.list_plans_for_user(user.id).await?;
    Ok(ActivityRefreshResponse {
        activity: activity_view(snapshot, &plans, ctx.today),
        commits_last_week: metrics.commits_last_week,
        active_days: metrics.active_days,
        commit_gaps: metrics.commit_gaps,
    })
}
