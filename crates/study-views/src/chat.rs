//! Question/answer transcript for one mounted chat view.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use study_api::StudyApi;
use study_core::entities::ChatTurn;
use study_core::enums::AskStatus;
use study_core::ids::WorkspaceId;

use crate::error::ViewError;
use crate::scope::ViewScope;
use crate::session::SessionContext;

#[derive(Debug, Default)]
struct ChatState {
    status: AskStatus,
    transcript: Vec<ChatTurn>,
    draft: String,
    last_error: Option<String>,
}

/// Chat with the assistant of one workspace.
///
/// Asks are serialized: while one is pending a second is refused, so turns
/// land in the order they were asked. The transcript lives only as long as
/// the session value.
pub struct ChatSession<A> {
    api: Arc<A>,
    workspace: WorkspaceId,
    scope: ViewScope,
    state: Mutex<ChatState>,
}

impl<A: StudyApi> ChatSession<A> {
    #[must_use]
    pub fn new(session: &SessionContext<A>, workspace: WorkspaceId) -> Self {
        Self {
            api: Arc::clone(session.api()),
            workspace,
            scope: session.scope(),
            state: Mutex::new(ChatState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    pub fn transcript(&self) -> Vec<ChatTurn> {
        self.state().transcript.clone()
    }

    pub fn status(&self) -> AskStatus {
        self.state().status
    }

    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
    }

    /// Ask the current draft.
    ///
    /// # Errors
    ///
    /// See [`Self::ask`].
    pub async fn send_draft(&self) -> Result<Option<ChatTurn>, ViewError> {
        let draft = self.draft();
        self.ask(&draft).await
    }

    /// Ask `question` and append the answer to the transcript.
    ///
    /// A question that is empty after trimming returns `Ok(None)` without a
    /// request. On success the draft is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AskInFlight`] while another ask is pending,
    /// [`ViewError::Unmounted`] if the view went away first, or the backend
    /// error. On failure the transcript and draft are left untouched.
    pub async fn ask(&self, question: &str) -> Result<Option<ChatTurn>, ViewError> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(None);
        }

        {
            let mut state = self.state();
            if !state.status.can_transition_to(AskStatus::Asking) {
                return Err(ViewError::AskInFlight);
            }
            state.status = AskStatus::Asking;
        }

        tracing::debug!(workspace = %self.workspace, "asking");
        let outcome = self.scope.request(self.api.ask(&self.workspace, question)).await;

        let mut state = self.state();
        match outcome {
            Ok(reply) => {
                let turn = ChatTurn::from_reply(question, reply);
                state.transcript.push(turn.clone());
                state.draft.clear();
                state.last_error = None;
                state.status = AskStatus::Idle;
                Ok(Some(turn))
            }
            Err(ViewError::Unmounted) => Err(ViewError::Unmounted),
            Err(e) => {
                tracing::warn!(workspace = %self.workspace, error = %e, "ask failed");
                state.last_error = Some(e.to_string());
                state.status = AskStatus::Idle;
                Err(e)
            }
        }
    }

    /// Cancel a pending ask; its answer is never appended.
    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
