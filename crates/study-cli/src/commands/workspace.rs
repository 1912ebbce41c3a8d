#[path = "workspace/create.rs"]
mod create;
#[path = "workspace/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WorkspaceCommands;
use crate::commands::shared::gate;
use crate::context::AppContext;

/// Handle `sbd workspace`. Both actions belong to the dashboard view.
pub async fn handle(action: &WorkspaceCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    gate::enter(ctx, "/").await?;
    match action {
        WorkspaceCommands::List => list::run(ctx, flags).await,
        WorkspaceCommands::Create { title, deadline } => create::run(title, *deadline, ctx, flags).await,
    }
}
