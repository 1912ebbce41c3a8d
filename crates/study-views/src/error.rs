//! View-layer error types.

use study_api::ApiError;
use study_core::errors::CoreError;
use thiserror::Error;

/// Errors surfaced by the stateful views.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The backend call failed. Transport failures, conflicts and status
    /// errors all arrive here unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Workspace creation was attempted with a blank title.
    #[error("workspace title must not be empty")]
    EmptyTitle,

    /// A submission is already in flight for this upload view.
    #[error("an upload is already being processed")]
    SubmissionInFlight,

    /// A question is already in flight for this chat view.
    #[error("a question is already being answered")]
    AskInFlight,

    /// The owning view was unmounted before the response arrived; nothing
    /// was written.
    #[error("view was unmounted before the request completed")]
    Unmounted,
}

impl ViewError {
    /// The backend said the session is missing or expired.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(ApiError::Unauthorized))
    }
}
