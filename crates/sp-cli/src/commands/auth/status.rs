use serde::Serialize;
use sp_core::entities::User;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::current_user;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<User>,
    source: Option<&'static str>,
    note: Option<String>,
}

/// Handle `spl auth status`.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&status(ctx).await?, flags.format)
}

async fn status(ctx: &AppContext) -> anyhow::Result<AuthStatusResponse> {
    Ok(match current_user(ctx).await? {
        Some((user, source)) => AuthStatusResponse {
            authenticated: true,
            user: Some(user),
            source: Some(source.as_str()),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            user: None,
            source: None,
            note: Some("not signed in, run `spl auth login`".into()),
        },
    })
}
