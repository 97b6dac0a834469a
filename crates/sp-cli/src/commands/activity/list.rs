use sp_core::dates::relative_label;
use sp_core::entities::{ActivitySnapshot, StudyPlan, User};
use sp_core::responses::ActivityView;
use sp_plan::analysis::commit_consistency;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `spl activity list`.
pub async fn run(user: &User, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshots = ctx.service.list_snapshots_for_user(user.id).await?;
    let plans = ctx.service.list_plans_for_user(user.id).await?;
    let views = snapshots
        .into_iter()
        .map(|s| activity_view(s, &plans, ctx.today))
        .collect::<Vec<_>>();
    output(&views, flags.format)
}

/// Consistency is only scored for repositories some plan targets.
pub(crate) fn activity_view(
    snapshot: ActivitySnapshot,
    plans: &[StudyPlan],
    today: chrono::NaiveDate,
) -> ActivityView {
    let consistency = plans
        .iter()
        .any(|p| p.target == snapshot.repo_name)
        .then(|| commit_consistency(Some(&snapshot)));
    ActivityView {
        status: snapshot.status(today),
        last_commit: relative_label(snapshot.last_commit_date, today),
        consistency,
        snapshot,
    }
}
