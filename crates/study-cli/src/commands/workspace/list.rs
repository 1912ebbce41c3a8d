use study_views::Dashboard;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dashboard = Dashboard::mount(&ctx.session);
    let workspaces = dashboard.workspaces().list().await?;
    output(&workspaces, flags.format)
}
