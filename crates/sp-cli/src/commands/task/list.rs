use sp_core::entities::User;
use sp_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::owned_plan;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl task list`.
pub async fn run(
    plan_id: i64,
    status: Option<&str>,
    limit: Option<u32>,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<TaskStatus>(raw, "status"))
        .transpose()?;
    let plan = owned_plan(ctx, user, plan_id).await?;

    let tasks = ctx.service.list_tasks_for_plan(plan.id, status).await?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(tasks, limit), flags.format)
}
