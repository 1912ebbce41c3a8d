//! The reqwest-backed client and its cookie jar.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use study_config::ApiConfig;

use crate::error::ApiError;
use crate::session_store::SessionStore;

/// HTTP client for the StudyBuddy backend.
///
/// Holds the cookie jar that carries the backend session. When built with a
/// [`SessionStore`], login and logout keep the stored cookie in sync.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: reqwest::Url,
    store: Option<SessionStore>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] for an unparseable base URL and
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = reqwest::Url::parse(config.base_url_trimmed())
            .map_err(|e| ApiError::Parse(format!("invalid base URL '{}': {e}", config.base_url)))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url,
            store: None,
        })
    }

    /// Attach a session store and seed the jar from it.
    #[must_use]
    pub fn with_session_store(mut self, store: SessionStore) -> Self {
        if let Some(cookies) = store.load() {
            self.restore_cookies(&cookies);
        }
        self.store = Some(store);
        self
    }

    /// Seed the jar from a cookie header (`a=1; b=2`).
    pub fn restore_cookies(&self, header: &str) {
        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            self.jar.add_cookie_str(pair, &self.base_url);
        }
    }

    /// Cookie header the jar would send to the backend, if any.
    #[must_use]
    pub fn session_cookies(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
            .filter(|value| !value.is_empty())
    }

    /// Absolute URL for an API path such as `/workspaces/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    pub(crate) fn persist_session(&self) -> Result<(), ApiError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        match self.session_cookies() {
            Some(cookies) => store.store(&cookies),
            None => {
                tracing::warn!("login succeeded but the backend set no session cookie");
                Ok(())
            }
        }
    }

    pub(crate) fn forget_session(&self) -> Result<(), ApiError> {
        self.store.as_ref().map_or(Ok(()), SessionStore::delete)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ApiClient::new(&config("http://localhost:5000/api/")).unwrap();
        assert_eq!(client.endpoint("/workspaces/"), "http://localhost:5000/api/workspaces/");
        assert_eq!(client.endpoint("/auth/me"), "http://localhost:5000/api/auth/me");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ApiClient::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn restored_cookies_are_sent_back() {
        let client = ApiClient::new(&config("http://localhost:5000/api")).unwrap();
        assert!(client.session_cookies().is_none());

        client.restore_cookies("session=abc; remember_token=xyz");
        let header = client.session_cookies().expect("cookies present");
        assert!(header.contains("session=abc"));
        assert!(header.contains("remember_token=xyz"));
    }

    #[test]
    fn session_store_seeds_the_jar() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path().join("session"));
        store.store("session=persisted").unwrap();

        let client = ApiClient::new(&config("http://localhost:5000/api"))
            .unwrap()
            .with_session_store(store);
        assert_eq!(client.session_cookies().as_deref(), Some("session=persisted"));
    }

    #[test]
    fn forget_session_removes_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path().join("session"));
        store.store("session=persisted").unwrap();

        let client = ApiClient::new(&config("http://localhost:5000/api"))
            .unwrap()
            .with_session_store(store.clone());
        client.forget_session().unwrap();
        assert!(store.load().is_none());
    }
}
