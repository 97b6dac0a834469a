use sp_core::dates::days_between;
use sp_core::entities::User;
use sp_core::enums::PlanTrack;
use sp_core::responses::PlanDetailResponse;
use sp_plan::analysis::{completion_estimate, derived_completion};

use crate::cli::GlobalFlags;
use crate::commands::shared::session::owned_plan;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl plan show`.
pub async fn run(id: i64, user: &User, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&plan_detail(id, user, ctx).await?, flags.format)
}

pub(crate) async fn plan_detail(
    id: i64,
    user: &User,
    ctx: &AppContext,
) -> anyhow::Result<PlanDetailResponse> {
    let plan = owned_plan(ctx, user, id).await?;
    let tasks = ctx.service.list_tasks_for_plan(plan.id, None).await?;

    // Forecasts need commit data, which only repository-backed plans have.
    let estimate = if plan.track == PlanTrack::Commit {
        let snapshot = ctx.service.find_snapshot(user.id, &plan.target).await?;
        Some(completion_estimate(&plan, snapshot.as_ref(), ctx.today))
    } else {
        None
    };

    Ok(PlanDetailResponse {
        derived_completion: derived_completion(&tasks),
        days_remaining: days_between(ctx.today, plan.deadline).max(0),
        estimate,
        plan,
        tasks,
    })
}
