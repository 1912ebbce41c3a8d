use serde::Serialize;
use study_core::entities::Credentials;
use study_core::enums::GateState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    username: String,
    authenticated: bool,
    session_file: Option<String>,
}

pub async fn handle(args: &CredentialArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = Credentials::new(args.username.clone(), args.password.clone());
    ctx.session.login(&credentials).await?;

    let state = ctx.session.check_session().await;
    if state != GateState::Authenticated {
        tracing::warn!("login succeeded but the session check did not");
    }

    output(
        &LoginResponse {
            username: args.username.clone(),
            authenticated: state == GateState::Authenticated,
            session_file: ctx.session_file.as_ref().map(|p| p.display().to_string()),
        },
        flags.format,
    )
}
