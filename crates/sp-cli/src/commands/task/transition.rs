use anyhow::Context;
use sp_core::entities::{StudyTask, User};
use sp_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::session::owned_plan;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl task complete` and `spl task miss`.
pub async fn run(
    id: i64,
    status: TaskStatus,
    user: &User,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&transition(id, status, user, ctx).await?, flags.format)
}

pub(crate) async fn transition(
    id: i64,
    status: TaskStatus,
    user: &User,
    ctx: &AppContext,
) -> anyhow::Result<StudyTask> {
    let task = ctx
        .service
        .get_task(id)
        .await
        .with_context(|| format!("task {id} not found"))?;
    owned_plan(ctx, user, task.plan_id)
        .await
        .with_context(|| format!("task {id} not found"))?;

    Ok(ctx.service.transition_task(task.id, status).await?)
}

#[cfg(test)]
mod tests {
    use sp_core::enums::{TaskStatus, UserRole};

    use super::transition;
    use crate::commands::plan::create::{CreateInput, create_plan};
    use crate::commands::shared::test_context::signed_in;

    #[tokio::test]
    async fn completes_once_then_rejects() {
        let (ctx, user) = signed_in(UserRole::Normal).await;
        let created = create_plan(
            &CreateInput {
                target: "Biology",
                deadline: "2026-03-12",
                hours: 3,
                difficulty: None,
            },
            &user,
            &ctx,
        )
        .await
        .unwrap();
        let task_id = ctx.service.list_tasks_for_plan(created.plan.id, None).await.unwrap()[0].id;

        let done = transition(task_id, TaskStatus::Completed, &user, &ctx).await.unwrap();
        assert_eq!(done.status, TaskStatus::Completed);

        let err = transition(task_id, TaskStatus::Missed, &user, &ctx).await.unwrap_err();
        assert!(format!("{err:#}").contains("completed"));
    }

    #[tokio::test]
    async fn unknown_task_is_not_found() {
        let (ctx, user) = signed_in(UserRole::Normal).await;
        let err = transition(999, TaskStatus::Completed, &user, &ctx).await.unwrap_err();
        assert!(err.to_string().contains("task 999 not found"));
    }
}
