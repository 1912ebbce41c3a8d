use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    cleared: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    output(
        &LogoutResponse {
            logged_out: true,
            cleared: ctx.session_file.as_ref().map(|p| p.display().to_string()),
        },
        flags.format,
    )
}
