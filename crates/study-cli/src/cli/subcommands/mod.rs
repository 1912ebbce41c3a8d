mod auth;
mod workspace;

pub use auth::{AuthCommands, CredentialArgs};
pub use workspace::WorkspaceCommands;
