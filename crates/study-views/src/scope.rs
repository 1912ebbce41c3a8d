//! Lifetime handle for a mounted view.
//!
//! Every request a view issues runs inside its scope. Unmounting the scope
//! drops in-flight requests, and a response that resolves after unmount is
//! reported as [`ViewError::Unmounted`] instead of being written to state.
//! A scope taken from a session also reports 401 answers back to the gate.

use std::future::Future;
use std::sync::Arc;

use study_api::ApiError;
use tokio::sync::watch;

use crate::error::ViewError;
use crate::session::GateCache;

#[derive(Debug, Clone)]
pub struct ViewScope {
    unmounted: Arc<watch::Sender<bool>>,
    gate: Option<GateCache>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    /// A scope not tied to any session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            unmounted: Arc::new(tx),
            gate: None,
        }
    }

    pub(crate) fn gated(gate: GateCache) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !*self.unmounted.borrow()
    }

    /// Cancel in-flight requests and refuse new ones. Idempotent.
    pub fn unmount(&self) {
        self.unmounted.send_replace(true);
    }

    /// Run `fut` unless the scope is unmounted first.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Unmounted`] if the scope was unmounted before or
    /// while `fut` ran.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ViewError> {
        let mut rx = self.unmounted.subscribe();
        if *rx.borrow_and_update() {
            return Err(ViewError::Unmounted);
        }

        tokio::select! {
            output = fut => {
                if self.is_mounted() {
                    Ok(output)
                } else {
                    Err(ViewError::Unmounted)
                }
            }
            _ = rx.wait_for(|gone| *gone) => {
                tracing::debug!("request dropped on unmount");
                Err(ViewError::Unmounted)
            }
        }
    }

    /// [`Self::run`] for backend calls, flattening the API error. An
    /// unauthorized answer expires the session gate, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Unmounted`] or the backend error.
    pub async fn request<T, F>(&self, fut: F) -> Result<T, ViewError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let outcome = self.run(fut).await.and_then(|reply| reply.map_err(ViewError::from));
        if let (Err(error), Some(gate)) = (&outcome, &self.gate)
            && error.is_unauthorized()
        {
            gate.expire();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use study_core::enums::GateState;

    #[tokio::test]
    async fn mounted_scope_passes_output_through() {
        let scope = ViewScope::new();
        assert_eq!(scope.run(async { 7 }).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn unmounted_scope_refuses_new_work() {
        let scope = ViewScope::new();
        scope.unmount();
        assert!(!scope.is_mounted());
        assert!(matches!(scope.run(async { 7 }).await, Err(ViewError::Unmounted)));
    }

    #[tokio::test]
    async fn unmount_cancels_pending_work() {
        let scope = ViewScope::new();
        let clone = scope.clone();

        let (result, ()) = tokio::join!(
            scope.run(std::future::pending::<()>()),
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                clone.unmount();
            }
        );
        assert!(matches!(result, Err(ViewError::Unmounted)));
    }

    #[tokio::test]
    async fn request_flattens_api_errors() {
        let scope = ViewScope::new();
        let err = scope
            .request(async { Err::<(), _>(ApiError::Unauthorized) })
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn unauthorized_reply_expires_the_gate() {
        let gate = GateCache::new();
        let scope = ViewScope::gated(gate.clone());

        let _ = scope
            .request(async { Err::<(), _>(ApiError::Api { status: 500, message: "boom".into() }) })
            .await;
        assert_eq!(gate.get(), GateState::Unknown);

        let _ = scope.request(async { Err::<(), _>(ApiError::Unauthorized) }).await;
        assert_eq!(gate.get(), GateState::Unauthenticated);
    }
}
