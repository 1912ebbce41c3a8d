//! Document submission for one mounted upload view.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use study_api::{StudyApi, UploadDocument};
use study_core::entities::UploadResult;
use study_core::enums::UploadStatus;
use study_core::errors::CoreError;
use study_core::ids::WorkspaceId;

use crate::error::ViewError;
use crate::scope::ViewScope;
use crate::session::SessionContext;

/// What the upload view currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadView {
    pub status: UploadStatus,
    pub result: Option<UploadResult>,
    pub error: Option<String>,
}

impl UploadView {
    fn transition(&mut self, next: UploadStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity: "upload",
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Submits documents to one workspace, at most one at a time.
///
/// The result shown here is independent of [`crate::UploadsCache`]; a
/// successful submission is never merged into it.
pub struct UploadFlow<A> {
    api: Arc<A>,
    workspace: WorkspaceId,
    scope: ViewScope,
    view: Mutex<UploadView>,
}

impl<A: StudyApi> UploadFlow<A> {
    /// Mount the upload view for `workspace` under `session`.
    #[must_use]
    pub fn new(session: &SessionContext<A>, workspace: WorkspaceId) -> Self {
        Self {
            api: Arc::clone(session.api()),
            workspace,
            scope: session.scope(),
            view: Mutex::new(UploadView::default()),
        }
    }

    fn view(&self) -> MutexGuard<'_, UploadView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    pub fn snapshot(&self) -> UploadView {
        self.view().clone()
    }

    pub fn status(&self) -> UploadStatus {
        self.view().status
    }

    pub fn result(&self) -> Option<UploadResult> {
        self.view().result.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.view().error.clone()
    }

    /// Whether a new submission would be accepted.
    pub fn trigger_enabled(&self) -> bool {
        self.status().is_idle()
    }

    /// Submit `document` for processing.
    ///
    /// `None` is a silent no-op: no request, no state change.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SubmissionInFlight`] while another submission is
    /// pending, [`ViewError::Unmounted`] if the view went away first, or the
    /// backend error (which is also recorded on the view).
    pub async fn submit(&self, document: Option<UploadDocument>) -> Result<Option<UploadResult>, ViewError> {
        let Some(document) = document else {
            tracing::debug!(workspace = %self.workspace, "no document selected");
            return Ok(None);
        };

        {
            let mut view = self.view();
            if !view.status.can_transition_to(UploadStatus::Submitting) {
                return Err(ViewError::SubmissionInFlight);
            }
            view.transition(UploadStatus::Submitting)?;
            view.result = None;
            view.error = None;
        }

        tracing::info!(
            workspace = %self.workspace,
            filename = document.filename(),
            bytes = document.len(),
            "submitting document"
        );
        match self.scope.request(self.api.submit_upload(&self.workspace, &document)).await {
            Ok(result) => {
                let mut view = self.view();
                view.transition(UploadStatus::Ready)?;
                view.result = Some(result.clone());
                Ok(Some(result))
            }
            Err(ViewError::Unmounted) => Err(ViewError::Unmounted),
            Err(e) => {
                tracing::warn!(workspace = %self.workspace, error = %e, "upload failed");
                let mut view = self.view();
                view.transition(UploadStatus::Failed)?;
                view.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Cancel a pending submission; its response is never applied.
    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
