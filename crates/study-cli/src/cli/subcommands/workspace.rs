use chrono::NaiveDate;
use clap::Subcommand;

use crate::commands::shared::parse::parse_deadline;

/// Workspace commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// List workspaces in backend order.
    List,
    /// Create a workspace.
    Create {
        title: String,
        /// Deadline as YYYY-MM-DD.
        #[arg(long, value_parser = parse_deadline)]
        deadline: Option<NaiveDate>,
    },
}
