pub mod list;
pub mod today;
pub mod transition;

use sp_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::session::require_user;
use crate::context::AppContext;

/// Handle `spl task <subcommand>`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    match action {
        TaskCommands::Today => today::run(&user, ctx, flags).await,
        TaskCommands::List {
            plan,
            status,
            limit,
        } => list::run(*plan, status.as_deref(), *limit, &user, ctx, flags).await,
        TaskCommands::Complete { id } => {
            transition::run(*id, TaskStatus::Completed, &user, ctx, flags).await
        }
        TaskCommands::Miss { id } => {
            transition::run(*id, TaskStatus::Missed, &user, ctx, flags).await
        }
    }
}
