pub mod list;
pub mod refresh;
pub mod repos;

use anyhow::Context;
use sp_core::entities::User;
use sp_core::enums::OAuthProvider;
use sp_github::GithubClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::commands::shared::session::require_user;
use crate::context::AppContext;

/// Handle `spl activity <subcommand>`.
pub async fn handle(
    action: &ActivityCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = require_user(ctx).await?;
    match action {
        ActivityCommands::Refresh { repo } => refresh::run(repo, &user, ctx, flags).await,
        ActivityCommands::List => list::run(&user, ctx, flags).await,
        ActivityCommands::Repos { limit } => repos::run(*limit, &user, ctx, flags).await,
    }
}

/// GitHub client authorized with the user's stored OAuth token.
///
/// Only a token issued by GitHub is sent to the GitHub API.
fn github_client(user: &User, ctx: &AppContext) -> anyhow::Result<GithubClient> {
    if user.oauth_provider != OAuthProvider::Github {
        anyhow::bail!(
            "signed in with {}; GitHub activity needs `spl auth login --provider github`",
            user.oauth_provider
        );
    }
    let token = user
        .access_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .context("no GitHub access token stored; sign in with `spl auth login --provider github`")?;
    Ok(GithubClient::new(
        &ctx.config.github.api_url,
        token,
        &ctx.config.general.user_agent,
    )?)
}
