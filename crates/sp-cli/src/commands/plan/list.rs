use sp_core::entities::User;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl plan list`: nearest deadline first.
pub async fn run(user: &User, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plans = ctx.service.list_plans_for_user(user.id).await?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    output(&truncate(plans, limit), flags.format)
}
