use anyhow::Context;
use sp_core::dates::parse_date;
use sp_core::entities::{PlanDraft, User};
use sp_core::enums::{Difficulty, PlanTrack};
use sp_core::responses::PlanCreateResponse;
use sp_core::validation::{
    require_daily_hours, require_future_deadline, require_github_repo, sanitize_input,
};
use sp_plan::PlanParams;
use sp_plan::strategy::Strategy;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct CreateInput<'a> {
    pub target: &'a str,
    pub deadline: &'a str,
    pub hours: u32,
    pub difficulty: Option<&'a str>,
}

/// Handle `spl plan create`.
pub async fn run(
    input: &CreateInput<'_>,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&create_plan(input, user, ctx).await?, flags.format)
}

/// Validate, generate the tasks, then store the plan and its tasks together.
pub(crate) async fn create_plan(
    input: &CreateInput<'_>,
    user: &User,
    ctx: &AppContext,
) -> anyhow::Result<PlanCreateResponse> {
    let track = PlanTrack::for_role(user.role);
    let target = sanitize_input(input.target);
    if target.is_empty() {
        anyhow::bail!("--target must not be empty");
    }
    let deadline = parse_date(input.deadline)?;
    require_future_deadline(deadline, ctx.today)?;
    require_daily_hours(input.hours)?;
    if track == PlanTrack::Commit {
        require_github_repo(&target)?;
    }
    let difficulty = input.difficulty.map_or_else(Difficulty::default, Difficulty::parse_lenient);

    let draft = PlanDraft {
        user_id: user.id,
        target,
        deadline,
        difficulty,
        daily_hours: input.hours,
        track,
    };
    let tasks = track.generate(&PlanParams::from(&draft), ctx.today);
    let (plan, saved) = ctx
        .service
        .create_plan_with_tasks(&draft, &tasks)
        .await
        .context("failed to create plan")?;

    let task_count = saved.len();
    tracing::info!(plan_id = plan.id, %track, task_count, "plan generated");
    Ok(PlanCreateResponse { plan, task_count })
}
