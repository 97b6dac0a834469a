use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use sp_auth::{OAuthClient, ProviderConfig, Session, UserProfile};
use sp_core::entities::User;
use sp_core::enums::{OAuthProvider, UserRole};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::auth::role::set_role;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    provider: OAuthProvider,
    user: User,
}

/// Handle `spl auth login`.
///
/// Runs the browser flow, upserts the user by email, and records the session.
pub async fn run(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider: OAuthProvider = parse_enum(&args.provider, "provider")?;
    let role: Option<UserRole> = args
        .role
        .as_deref()
        .map(|raw| parse_enum(raw, "role"))
        .transpose()?;
    ctx.config.require_provider(provider.as_str())?;

    let (provider_config, client_id, client_secret) = match provider {
        OAuthProvider::Github => (
            ProviderConfig::github_with_api_url(&ctx.config.github.api_url),
            &ctx.config.github.client_id,
            &ctx.config.github.client_secret,
        ),
        OAuthProvider::Google => (
            ProviderConfig::google(),
            &ctx.config.google.client_id,
            &ctx.config.google.client_secret,
        ),
    };

    let callback = &ctx.config.callback;
    let client = OAuthClient::new(
        provider_config,
        client_id,
        client_secret,
        &callback.redirect_base(),
        &ctx.config.general.user_agent,
    )?;

    let profile = sp_auth::browser_flow::login(
        &client,
        &callback.host,
        callback.port,
        Duration::from_secs(callback.timeout_secs),
    )
    .await
    .context("sign-in failed")?;

    let user = store_profile(profile, role, ctx).await?;

    sp_auth::session_store::store(&Session {
        user_id: user.id,
        email: user.email.clone(),
    })?;
    tracing::info!(user_id = user.id, %provider, role = %user.role, "signed in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            provider,
            user,
        },
        flags.format,
    )
}

/// Upsert the signed-in identity. A new user gets `role` or the provider's
/// default; an existing user keeps their role unless `role` names another.
pub(crate) async fn store_profile(
    profile: UserProfile,
    role: Option<UserRole>,
    ctx: &AppContext,
) -> anyhow::Result<User> {
    let user = ctx
        .service
        .upsert_user(&profile.into_new_user(role))
        .await
        .context("failed to store signed-in user")?;

    match role {
        Some(role) => set_role(user, role, ctx).await.context("failed to update role"),
        None => Ok(user),
    }
}
