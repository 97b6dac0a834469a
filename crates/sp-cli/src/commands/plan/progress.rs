use sp_core::entities::User;
use sp_core::validation::require_percentage;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::owned_plan;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl plan progress`: the stored percentage is only ever set here.
pub async fn run(
    id: i64,
    percent: u32,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let percentage = require_percentage(percent)?;
    let plan = owned_plan(ctx, user, id).await?;
    let updated = ctx.service.update_completion(plan.id, percentage).await?;
    output(&updated, flags.format)
}
