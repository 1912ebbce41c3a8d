use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, WorkspaceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Account and session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// List or create workspaces.
    Workspace {
        #[command(subcommand)]
        action: WorkspaceCommands,
    },
    /// Show the dashboard: workspaces, optionally with their uploads.
    Dashboard(DashboardArgs),
    /// Show processed uploads of one workspace.
    Uploads(UploadsArgs),
    /// Upload a PDF and show its summary, study plan, and videos.
    Upload(UploadArgs),
    /// Ask questions about a workspace's notes.
    Chat(ChatArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Also fetch the uploads of every workspace.
    #[arg(long)]
    pub uploads: bool,
}

#[derive(Clone, Debug, Args)]
pub struct UploadsArgs {
    /// Workspace identifier.
    pub workspace_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Workspace identifier.
    pub workspace_id: String,
    /// Path to a PDF document.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Workspace identifier.
    pub workspace_id: String,
    /// Question to ask; repeat for several. Reads questions from stdin when
    /// omitted.
    #[arg(short, long)]
    pub question: Vec<String>,
}
