use serde::Serialize;
use study_core::entities::UploadResult;
use study_core::ids::WorkspaceId;
use study_views::Dashboard;

use crate::cli::root_commands::UploadsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::gate;
use crate::context::AppContext;
use crate::output::output;

/// One line per upload; the full records are printed for json/raw.
#[derive(Serialize)]
struct UploadRow {
    id: String,
    filename: String,
    summary: String,
    stages: usize,
    videos: usize,
}

impl From<&UploadResult> for UploadRow {
    fn from(upload: &UploadResult) -> Self {
        Self {
            id: upload.id.clone(),
            filename: upload.filename.clone(),
            summary: upload.summary.lines().next().unwrap_or_default().to_string(),
            stages: upload.study_plan.len(),
            videos: upload.videos.len(),
        }
    }
}

/// Handle `sbd uploads <workspace-id>`: the dashboard's "view uploads".
pub async fn handle(args: &UploadsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    gate::enter(ctx, "/").await?;

    let dashboard = Dashboard::mount(&ctx.session);
    let uploads = dashboard
        .uploads()
        .fetch(&WorkspaceId::new(args.workspace_id.as_str()))
        .await?;

    match flags.format {
        OutputFormat::Table => {
            let rows = uploads.iter().map(UploadRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&uploads, flags.format),
    }
}
