use study_views::{Navigation, Route};

use crate::context::AppContext;

/// Navigate to `path` and return the mounted route.
///
/// A redirect means the session gate refused; it is reported as a login hint
/// rather than a backend error.
pub async fn enter(ctx: &AppContext, path: &str) -> anyhow::Result<Route> {
    match ctx.router.navigate(path).await {
        Navigation::Mount(route) => Ok(route),
        Navigation::Redirect(_) => anyhow::bail!("not logged in (run `sbd auth login`)"),
        Navigation::NotFound(path) => anyhow::bail!("no view at '{path}'"),
    }
}
