use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account (does not log in).
    Register(CredentialArgs),
    /// Log in and store the session cookie.
    Login(CredentialArgs),
    /// End the session and remove the stored cookie.
    Logout,
    /// Check whether the stored session is still valid.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    pub username: String,
    #[arg(long, env = "STUDYBUDDY_PASSWORD", hide_env_values = true)]
    pub password: String,
}
