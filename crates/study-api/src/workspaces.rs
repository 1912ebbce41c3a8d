//! `/workspaces/` endpoints.

use study_core::entities::{NewWorkspace, Workspace};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, decode};

impl ApiClient {
    /// `GET /workspaces/`: the caller's workspaces, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let resp = check_response(self.http.get(self.endpoint("/workspaces/")).send().await?).await?;
        let workspaces: Vec<Workspace> = decode(resp).await?;
        tracing::debug!(count = workspaces.len(), "listed workspaces");
        Ok(workspaces)
    }

    /// `POST /workspaces/`. The response body is not used: callers re-list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend returns a
    /// non-success status.
    pub async fn create_workspace(&self, workspace: &NewWorkspace) -> Result<(), ApiError> {
        tracing::debug!(title = %workspace.title, "creating workspace");
        let resp = self
            .http
            .post(self.endpoint("/workspaces/"))
            .json(workspace)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
