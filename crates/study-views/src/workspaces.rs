//! Workspace list held by the dashboard.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use study_api::StudyApi;
use study_core::entities::{NewWorkspace, Workspace};

use crate::error::ViewError;
use crate::scope::ViewScope;

/// The current user's workspaces, in backend order.
///
/// `create` never inserts locally: a new workspace only shows up once the
/// follow-up `list` succeeds.
pub struct WorkspaceStore<A> {
    api: Arc<A>,
    scope: ViewScope,
    workspaces: Mutex<Vec<Workspace>>,
}

impl<A: StudyApi> WorkspaceStore<A> {
    #[must_use]
    pub fn new(api: Arc<A>, scope: ViewScope) -> Self {
        Self {
            api,
            scope,
            workspaces: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the last successfully listed workspaces.
    pub fn workspaces(&self) -> Vec<Workspace> {
        self.workspaces.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Fetch the list and replace the held one.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; the held list is left as it was.
    pub async fn list(&self) -> Result<Vec<Workspace>, ViewError> {
        let fresh = self.scope.request(self.api.list_workspaces()).await?;
        tracing::debug!(count = fresh.len(), "workspaces listed");
        *self.workspaces.lock().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        Ok(fresh)
    }

    /// Create a workspace, then refresh the list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyTitle`] without a request when the trimmed
    /// title is empty. Backend failures of either the create or the refresh
    /// propagate and leave the held list intact.
    pub async fn create(&self, title: &str, deadline: Option<NaiveDate>) -> Result<Vec<Workspace>, ViewError> {
        let request = NewWorkspace::new(title, deadline).map_err(|_| ViewError::EmptyTitle)?;
        self.scope.request(self.api.create_workspace(&request)).await?;
        tracing::info!(title = %request.title, "workspace created");
        self.list().await
    }
}
