use chrono::NaiveDate;
use serde::Serialize;
use study_core::entities::Workspace;
use study_views::Dashboard;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CreateResponse {
    created: String,
    deadline: Option<NaiveDate>,
    workspaces: Vec<Workspace>,
}

pub async fn run(
    title: &str,
    deadline: Option<NaiveDate>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dashboard = Dashboard::mount(&ctx.session);
    let workspaces = dashboard.workspaces().create(title, deadline).await?;

    output(
        &CreateResponse {
            created: title.trim().to_string(),
            deadline,
            workspaces,
        },
        flags.format,
    )
}
