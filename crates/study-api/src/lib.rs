//! # study-api
//!
//! HTTP client for the StudyBuddy backend.
//!
//! Covers every endpoint the client consumes:
//! - `/auth/me`, `/auth/register`, `/auth/login`, `/auth/logout`
//! - `/workspaces/` (list, create)
//! - `/uploads/{workspace_id}` (list, multipart submit)
//! - `/chat/{workspace_id}/chat`
//!
//! The [`StudyApi`] trait is the seam the view layer depends on; [`ApiClient`]
//! is its reqwest implementation.

mod auth;
mod chat;
mod client;
mod document;
mod error;
mod http;
mod session_store;
mod uploads;
mod workspaces;

pub use client::ApiClient;
pub use document::{PDF_MIME, UploadDocument};
pub use error::ApiError;
pub use session_store::SessionStore;

use std::future::Future;

use study_core::entities::{ChatReply, Credentials, NewWorkspace, SessionUser, UploadResult, Workspace};
use study_core::ids::WorkspaceId;

/// Backend operations used by the views.
///
/// Every method is one request/response round-trip; implementations never
/// retry.
pub trait StudyApi: Send + Sync {
    fn current_user(&self) -> impl Future<Output = Result<SessionUser, ApiError>> + Send;

    fn register(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn list_workspaces(&self) -> impl Future<Output = Result<Vec<Workspace>, ApiError>> + Send;

    fn create_workspace(
        &self,
        workspace: &NewWorkspace,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn list_uploads(
        &self,
        workspace: &WorkspaceId,
    ) -> impl Future<Output = Result<Vec<UploadResult>, ApiError>> + Send;

    fn submit_upload(
        &self,
        workspace: &WorkspaceId,
        document: &UploadDocument,
    ) -> impl Future<Output = Result<UploadResult, ApiError>> + Send;

    fn ask(
        &self,
        workspace: &WorkspaceId,
        question: &str,
    ) -> impl Future<Output = Result<ChatReply, ApiError>> + Send;
}

impl StudyApi for ApiClient {
    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        Self::current_user(self).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        Self::register(self, credentials).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        Self::login(self, credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Self::logout(self).await
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        Self::list_workspaces(self).await
    }

    async fn create_workspace(&self, workspace: &NewWorkspace) -> Result<(), ApiError> {
        Self::create_workspace(self, workspace).await
    }

    async fn list_uploads(&self, workspace: &WorkspaceId) -> Result<Vec<UploadResult>, ApiError> {
        Self::list_uploads(self, workspace).await
    }

    async fn submit_upload(
        &self,
        workspace: &WorkspaceId,
        document: &UploadDocument,
    ) -> Result<UploadResult, ApiError> {
        Self::submit_upload(self, workspace, document).await
    }

    async fn ask(&self, workspace: &WorkspaceId, question: &str) -> Result<ChatReply, ApiError> {
        Self::ask(self, workspace, question).await
    }
}
