use sp_core::entities::User;
use sp_core::responses::AdjustResponse;
use sp_plan::strategy::Strategy;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::owned_plan;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl plan adjust`.
pub async fn run(
    id: i64,
    commit_missed: bool,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&adjust_plan(id, commit_missed, user, ctx).await?, flags.format)
}

pub(crate) async fn adjust_plan(
    id: i64,
    commit_missed: bool,
    user: &User,
    ctx: &AppContext,
) -> anyhow::Result<AdjustResponse> {
    let plan = owned_plan(ctx, user, id).await?;
    let tasks = ctx.service.list_tasks_for_plan(plan.id, None).await?;

    let moves = plan.track.adjust(&tasks, ctx.today, plan.deadline, commit_missed);
    let adjusted = ctx.service.reschedule_tasks(&moves).await?;
    tracing::info!(plan_id = plan.id, track = %plan.track, adjusted, commit_missed, "plan adjusted");

    Ok(AdjustResponse {
        plan_id: plan.id,
        adjusted,
        commit_missed,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sp_core::enums::{PlanTrack, TaskStatus, UserRole};

    use super::adjust_plan;
    use crate::commands::plan::create::{CreateInput, create_plan};
    use crate::commands::plan::show::plan_detail;
    use crate::commands::shared::test_context::signed_in;

    #[tokio::test]
    async fn commit_plan_moves_pending_tasks_and_tags_them() {
        let (mut ctx, user) = signed_in(UserRole::It).await;
        let created = create_plan(
            &CreateInput {
                target: "octo/hello",
                deadline: "2026-03-14",
                hours: 2,
                difficulty: Some("easy"),
            },
            &user,
            &ctx,
        )
        .await
        .unwrap();
        let before = ctx.service.list_tasks_for_plan(created.plan.id, None).await.unwrap();
        ctx.service.transition_task(before[0].id, TaskStatus::Completed).await.unwrap();

        ctx.today = ctx.today.succ_opt().unwrap().succ_opt().unwrap();
        let response = adjust_plan(created.plan.id, true, &user, &ctx).await.unwrap();
        assert_eq!(response.adjusted, before.len() - 1);
        assert!(response.commit_missed);

        let after = ctx.service.list_tasks_for_plan(created.plan.id, None).await.unwrap();
        assert_eq!(after.len(), before.len());
        let pending: Vec<_> = after.iter().filter(|t| t.status == TaskStatus::Pending).collect();
        assert!(pending.iter().all(|t| t.task_date >= ctx.today));
        assert!(pending.iter().all(|t| t.description.starts_with("[ADJUSTED] ")));
    }

    #[tokio::test]
    async fn commit_plan_keeps_its_track_after_role_change() {
        let (mut ctx, mut user) = signed_in(UserRole::It).await;
        let created = create_plan(
            &CreateInput {
                target: "octo/hello",
                deadline: "2026-03-14",
                hours: 2,
                difficulty: Some("easy"),
            },
            &user,
            &ctx,
        )
        .await
        .unwrap();

        user.role = UserRole::Normal;
        let user = ctx.service.update_user(&user).await.unwrap();
        ctx.today = ctx.today.succ_opt().unwrap().succ_opt().unwrap();

        let response = adjust_plan(created.plan.id, false, &user, &ctx).await.unwrap();
        assert_eq!(response.adjusted, created.task_count);

        let detail = plan_detail(created.plan.id, &user, &ctx).await.unwrap();
        assert_eq!(detail.plan.track, PlanTrack::Commit);
        assert!(detail.estimate.is_some());
    }

    #[tokio::test]
    async fn subject_plan_reports_zero_adjusted() {
        let (ctx, user) = signed_in(UserRole::Normal).await;
        let created = create_plan(
            &CreateInput {
                target: "Math",
                deadline: "2026-03-14",
                hours: 2,
                difficulty: None,
            },
            &user,
            &ctx,
        )
        .await
        .unwrap();

        let response = adjust_plan(created.plan.id, false, &user, &ctx).await.unwrap();
        assert_eq!(response.adjusted, 0);
    }
}
