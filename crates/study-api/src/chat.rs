//! `/chat/{workspace_id}/chat` endpoint.

use serde::Serialize;
use study_core::entities::ChatReply;
use study_core::ids::WorkspaceId;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, decode};

#[derive(Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

impl ApiClient {
    /// Ask the workspace assistant a question.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn ask(&self, workspace: &WorkspaceId, question: &str) -> Result<ChatReply, ApiError> {
        let url = self.endpoint(&format!("/chat/{}/chat", urlencoding::encode(workspace.as_str())));
        tracing::debug!(%workspace, "asking question");
        let resp = self
            .http
            .post(&url)
            .json(&ChatRequest { question })
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}
