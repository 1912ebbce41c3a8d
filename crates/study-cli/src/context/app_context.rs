use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use study_api::{ApiClient, SessionStore};
use study_config::StudyConfig;
use study_views::{SessionContext, ViewRouter};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: StudyConfig,
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionContext<ApiClient>>,
    pub router: ViewRouter<ApiClient>,
    /// Where the session cookie is persisted; `None` when a cookie override
    /// is configured.
    pub session_file: Option<PathBuf>,
}

impl AppContext {
    /// Build the HTTP client, attach the session cookie, and wire the
    /// session context into the router.
    pub fn init(config: StudyConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;

        let (client, session_file) = if config.session.has_cookie_override() {
            tracing::debug!("using session cookie from configuration");
            client.restore_cookies(&config.session.cookie);
            (client, None)
        } else {
            let store = SessionStore::resolve(&config.session.path)
                .context("failed to resolve session file location")?;
            let path = store.path().to_path_buf();
            (client.with_session_store(store), Some(path))
        };

        let api = Arc::new(client);
        let session = Arc::new(SessionContext::new(Arc::clone(&api)));
        let router = ViewRouter::new(Arc::clone(&session));

        Ok(Self {
            config,
            api,
            session,
            router,
            session_file,
        })
    }
}
