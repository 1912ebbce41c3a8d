use serde::Serialize;
use study_core::enums::GateState;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SessionReport {
    authenticated: bool,
    state: GateState,
    backend: String,
    has_cookie: bool,
    session_file: Option<String>,
    hint: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let has_cookie = ctx.api.session_cookies().is_some();
    let state = ctx.session.check_session().await;

    let hint = match (state, has_cookie) {
        (GateState::Authenticated, _) => None,
        (_, false) => Some("no stored session; run `sbd auth login`".to_string()),
        (_, true) => Some("stored session was rejected or the backend is unreachable".to_string()),
    };

    let status = SessionReport {
        authenticated: state == GateState::Authenticated,
        state,
        backend: ctx.config.api.base_url.clone(),
        has_cookie,
        session_file: ctx.session_file.as_ref().map(|p| p.display().to_string()),
        hint,
    };

    output(&status, flags.format)
}
