use serde::Serialize;
use sp_core::entities::User;
use sp_core::enums::{PlanTrack, UserRole};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::require_user;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthRoleResponse {
    user: User,
    /// Track given to plans created from now on. Existing plans keep theirs.
    new_plan_track: PlanTrack,
}

/// Handle `spl auth role`.
pub async fn run(raw: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role: UserRole = parse_enum(raw, "role")?;
    let user = require_user(ctx).await?;
    let user = set_role(user, role, ctx).await?;
    output(
        &AuthRoleResponse {
            new_plan_track: PlanTrack::for_role(user.role),
            user,
        },
        flags.format,
    )
}

pub(crate) async fn set_role(mut user: User, role: UserRole, ctx: &AppContext) -> anyhow::Result<User> {
    if user.role == role {
        return Ok(user);
    }
    tracing::info!(user_id = user.id, from = %user.role, to = %role, "role changed");
    user.role = role;
    Ok(ctx.service.update_user(&user).await?)
}
