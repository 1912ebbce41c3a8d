use chrono::NaiveDate;
use serde::Serialize;
use study_views::Dashboard;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::gate;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Activity;

#[derive(Serialize)]
struct DashboardRow {
    id: String,
    title: String,
    deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uploads: Option<usize>,
}

/// Handle `sbd dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    gate::enter(ctx, "/").await?;

    let dashboard = Dashboard::mount(&ctx.session);
    let workspaces = dashboard.workspaces().list().await?;

    if args.uploads {
        let activity = Activity::counting(workspaces.len(), "fetching uploads");
        for workspace in &workspaces {
            if let Err(error) = dashboard.uploads().fetch(&workspace.id).await {
                activity.failed("fetch failed");
                return Err(error.into());
            }
            activity.step();
        }
        activity.done();
    }

    let rows = workspaces
        .into_iter()
        .map(|workspace| DashboardRow {
            uploads: dashboard.uploads().get(&workspace.id).map(|u| u.len()),
            id: workspace.id.to_string(),
            title: workspace.title,
            deadline: workspace.deadline,
        })
        .collect::<Vec<_>>();

    dashboard.unmount();
    output(&rows, flags.format)
}
