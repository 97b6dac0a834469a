pub mod adjust;
pub mod create;
pub mod list;
pub mod progress;
pub mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::commands::shared::session::require_user;
use crate::context::AppContext;

/// Handle `spl plan <subcommand>`.
pub async fn handle(
    action: &PlanCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    match action {
        PlanCommands::Create {
            target,
            deadline,
            hours,
            difficulty,
        } => {
            let input = create::CreateInput {
                target,
                deadline,
                hours: *hours,
                difficulty: difficulty.as_deref(),
            };
            create::run(&input, &user, ctx, flags).await
        }
        PlanCommands::List => list::run(&user, ctx, flags).await,
        PlanCommands::Show { id } => show::run(*id, &user, ctx, flags).await,
        PlanCommands::Adjust { id, missed_commit } => {
            adjust::run(*id, *missed_commit, &user, ctx, flags).await
        }
        PlanCommands::Progress { id, percent } => {
            progress::run(*id, *percent, &user, ctx, flags).await
        }
    }
}
