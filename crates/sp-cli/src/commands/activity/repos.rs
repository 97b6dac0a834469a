use sp_core::entities::User;

use crate::cli::GlobalFlags;
use crate::commands::activity::github_client;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl activity repos`: most recently updated first.
pub async fn run(
    limit: Option<u32>,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let repos = github_client(user, ctx)?.list_repositories().await?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(repos, limit), flags.format)
}
