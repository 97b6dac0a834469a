pub mod login;
pub mod logout;
pub mod role;
pub mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `spl auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::run(args, ctx, flags).await,
        AuthCommands::Logout => logout::run(flags),
        AuthCommands::Status => status::run(ctx, flags).await,
        AuthCommands::Role { role } => role::run(role, ctx, flags).await,
    }
}
