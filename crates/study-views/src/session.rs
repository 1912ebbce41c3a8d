//! Process-wide session gate.
//!
//! [`SessionContext`] is built once per process and shared by the router and
//! the auth flows. The first [`SessionContext::is_authenticated`] call checks
//! `/auth/me`; later calls reuse the cached answer until something
//! invalidates it. Login and logout both invalidate. Views mounted through
//! [`SessionContext::scope`] mark the gate unauthenticated when the backend
//! answers 401, so the next protected navigation redirects.

use std::sync::{Arc, Mutex, PoisonError};

use study_api::StudyApi;
use study_core::entities::Credentials;
use study_core::enums::GateState;

use crate::error::ViewError;
use crate::scope::ViewScope;

/// The cached gate answer, shared between a session and its view scopes.
#[derive(Debug, Clone)]
pub(crate) struct GateCache(Arc<Mutex<GateState>>);

impl GateCache {
    pub(crate) fn new() -> Self {
        Self(Arc::new(Mutex::new(GateState::Unknown)))
    }

    pub(crate) fn get(&self) -> GateState {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, next: GateState) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// The backend rejected the session mid-view.
    pub(crate) fn expire(&self) {
        tracing::debug!("session rejected by backend");
        self.set(GateState::Unauthenticated);
    }
}

pub struct SessionContext<A> {
    api: Arc<A>,
    state: GateCache,
}

impl<A: StudyApi> SessionContext<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: GateCache::new(),
        }
    }

    #[must_use]
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// The last known gate state, without touching the network.
    pub fn state(&self) -> GateState {
        self.state.get()
    }

    fn set_state(&self, next: GateState) {
        self.state.set(next);
    }

    /// A fresh scope for a view mounted under this session. A 401 seen by
    /// any request in it resets the gate.
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        ViewScope::gated(self.state.clone())
    }

    /// Probe the backend and record the outcome.
    ///
    /// Any failure, including an unreachable backend, counts as
    /// unauthenticated. There is no retry.
    pub async fn check_session(&self) -> GateState {
        let next = match self.api.current_user().await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "session valid");
                GateState::Authenticated
            }
            Err(e) => {
                tracing::debug!(error = %e, "session check failed");
                GateState::Unauthenticated
            }
        };
        self.set_state(next);
        next
    }

    /// Whether the user has a valid session, probing only when unknown.
    pub async fn is_authenticated(&self) -> bool {
        let state = match self.state() {
            GateState::Unknown => self.check_session().await,
            known => known,
        };
        state == GateState::Authenticated
    }

    /// Forget the cached answer; the next gate check asks again.
    pub fn invalidate(&self) {
        self.set_state(GateState::Unknown);
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Propagates the backend error, e.g. a conflict for a taken username.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ViewError> {
        self.api.register(credentials).await?;
        tracing::info!(username = %credentials.username, "account registered");
        Ok(())
    }

    /// Log in and invalidate the cached gate state.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; the cached state is left as it was.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ViewError> {
        self.api.login(credentials).await?;
        self.invalidate();
        tracing::info!(username = %credentials.username, "logged in");
        Ok(())
    }

    /// Log out. The cached state is invalidated even when the backend call
    /// fails.
    ///
    /// # Errors
    ///
    /// Propagates the backend error.
    pub async fn logout(&self) -> Result<(), ViewError> {
        let result = self.api.logout().await;
        self.invalidate();
        result.map_err(ViewError::from)
    }
}
