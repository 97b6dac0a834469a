use sp_core::entities::User;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl task today`: every plan's tasks dated today.
pub async fn run(user: &User, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tasks = ctx.service.list_tasks_on(user.id, ctx.today).await?;
    output(&tasks, flags.format)
}
