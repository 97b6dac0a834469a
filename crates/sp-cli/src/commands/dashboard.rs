use sp_plan::analysis::dashboard_stats;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::require_user;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    let plans = ctx.service.list_plans_for_user(user.id).await?;
    let snapshots = ctx.service.list_snapshots_for_user(user.id).await?;
    let today_tasks = ctx.service.list_tasks_on(user.id, ctx.today).await?;

    output(
        &dashboard_stats(&plans, &snapshots, &today_tasks, ctx.today),
        flags.format,
    )
}
