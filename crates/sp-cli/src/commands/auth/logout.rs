use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Handle `spl auth logout`. Stored users and plans are kept.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let cleared = sp_auth::session_store::load().is_some();
    sp_auth::logout()?;
    output(&AuthLogoutResponse { cleared }, flags.format)
}
