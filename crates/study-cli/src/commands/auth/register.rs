use serde::Serialize;
use study_core::entities::Credentials;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RegisterResponse {
    username: String,
    registered: bool,
    next: &'static str,
}

pub async fn handle(args: &CredentialArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = Credentials::new(args.username.clone(), args.password.clone());
    ctx.session.register(&credentials).await?;

    output(
        &RegisterResponse {
            username: args.username.clone(),
            registered: true,
            next: "sbd auth login",
        },
        flags.format,
    )
}
