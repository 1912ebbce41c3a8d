//! `/uploads/{workspace_id}` endpoints.

use study_core::entities::UploadResult;
use study_core::ids::WorkspaceId;

use crate::client::ApiClient;
use crate::document::UploadDocument;
use crate::error::ApiError;
use crate::http::{check_response, decode};

impl ApiClient {
    /// `GET /uploads/{workspace_id}`: previously processed documents.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn list_uploads(&self, workspace: &WorkspaceId) -> Result<Vec<UploadResult>, ApiError> {
        let url = self.endpoint(&format!("/uploads/{}", urlencoding::encode(workspace.as_str())));
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let uploads: Vec<UploadResult> = decode(resp).await?;
        tracing::debug!(%workspace, count = uploads.len(), "listed uploads");
        Ok(uploads)
    }

    /// `POST /uploads/{workspace_id}`: submit one PDF and wait for the
    /// processed result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn submit_upload(
        &self,
        workspace: &WorkspaceId,
        document: &UploadDocument,
    ) -> Result<UploadResult, ApiError> {
        let url = self.endpoint(&format!("/uploads/{}", urlencoding::encode(workspace.as_str())));
        tracing::debug!(%workspace, filename = document.filename(), bytes = document.len(), "submitting upload");
        let resp = self.http.post(&url).multipart(document.to_form()?).send().await?;
        let resp = check_response(resp).await?;
        let result: UploadResult = decode(resp).await?;
        Ok(result.with_filename_fallback(document.filename()))
    }
}
