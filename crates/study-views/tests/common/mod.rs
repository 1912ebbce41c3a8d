//! In-memory backend shared by the view integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use study_api::{ApiError, StudyApi, UploadDocument};
use study_core::entities::{
    ChatReply, Credentials, NewWorkspace, SessionUser, SourceCitation, StudyPlan, UploadResult, VideoLink,
    Workspace,
};
use study_core::ids::WorkspaceId;
use tokio::sync::Notify;

/// Backend double with switchable failures and an optional gate that holds
/// every response until released.
#[derive(Default)]
pub struct FakeApi {
    authenticated: AtomicBool,
    expired: AtomicBool,
    next_id: AtomicU64,
    workspaces: Mutex<Vec<Workspace>>,
    uploads: Mutex<HashMap<WorkspaceId, Vec<UploadResult>>>,
    submit_reply: Mutex<Option<UploadResult>>,
    answers: Mutex<VecDeque<ChatReply>>,
    failing: Mutex<HashSet<&'static str>>,
    gate: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn signed_in() -> Arc<Self> {
        let api = Self::default();
        api.authenticated.store(true, Ordering::SeqCst);
        Arc::new(api)
    }

    pub fn set_authenticated(&self, value: bool) {
        self.authenticated.store(value, Ordering::SeqCst);
    }

    /// The backend forgets the session: every call answers 401 from now on.
    pub fn expire(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        self.expired.store(true, Ordering::SeqCst);
    }

    pub fn set_uploads(&self, workspace: &str, uploads: Vec<UploadResult>) {
        self.uploads.lock().unwrap().insert(WorkspaceId::new(workspace), uploads);
    }

    pub fn set_submit_reply(&self, result: UploadResult) {
        *self.submit_reply.lock().unwrap() = Some(result);
    }

    pub fn push_answer(&self, reply: ChatReply) {
        self.answers.lock().unwrap().push_back(reply);
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    /// Hold every subsequent response until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    /// Stop holding responses. Calls already waiting stay held until notified.
    pub fn open(&self) {
        *self.gate.lock().unwrap() = None;
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn enter(&self, op: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(op);
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.expired.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized);
        }
        if self.failing.lock().unwrap().contains(op) {
            return Err(ApiError::Api {
                status: 500,
                message: format!("{op} failed"),
            });
        }
        Ok(())
    }
}

impl StudyApi for FakeApi {
    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        self.enter("current_user").await?;
        if self.authenticated.load(Ordering::SeqCst) {
            Ok(SessionUser {
                id: "1".into(),
                username: "ada".into(),
            })
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.enter("register").await?;
        if credentials.username == "taken" {
            return Err(ApiError::Conflict("User already exists".into()));
        }
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.enter("login").await?;
        if credentials.password != "secret" {
            return Err(ApiError::InvalidCredentials);
        }
        self.set_authenticated(true);
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.enter("logout").await?;
        self.set_authenticated(false);
        Ok(())
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        self.enter("list_workspaces").await?;
        Ok(self.workspaces.lock().unwrap().clone())
    }

    async fn create_workspace(&self, workspace: &NewWorkspace) -> Result<(), ApiError> {
        self.enter("create_workspace").await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.workspaces.lock().unwrap().push(Workspace {
            id: WorkspaceId::from(id),
            title: workspace.title.clone(),
            deadline: workspace.deadline,
        });
        Ok(())
    }

    async fn list_uploads(&self, workspace: &WorkspaceId) -> Result<Vec<UploadResult>, ApiError> {
        self.enter("list_uploads").await?;
        Ok(self.uploads.lock().unwrap().get(workspace).cloned().unwrap_or_default())
    }

    async fn submit_upload(&self, _workspace: &WorkspaceId, document: &UploadDocument) -> Result<UploadResult, ApiError> {
        self.enter("submit_upload").await?;
        let reply = self.submit_reply.lock().unwrap().clone();
        Ok(reply.unwrap_or_else(|| upload("1", document.filename())))
    }

    async fn ask(&self, _workspace: &WorkspaceId, question: &str) -> Result<ChatReply, ApiError> {
        self.enter("ask").await?;
        let queued = self.answers.lock().unwrap().pop_front();
        Ok(queued.unwrap_or_else(|| ChatReply {
            answer: format!("answer to {question}"),
            sources: Vec::new(),
        }))
    }
}

/// Yield until `cond` holds; used to line up a second caller behind an
/// in-flight request.
pub async fn until(cond: impl Fn() -> bool) {
    while !cond() {
        tokio::task::yield_now().await;
    }
}

pub fn upload(id: &str, filename: &str) -> UploadResult {
    UploadResult {
        id: id.into(),
        filename: filename.into(),
        summary: format!("summary of {filename}"),
        study_plan: [("week1", "Read ch.1")].into_iter().collect::<StudyPlan>(),
        videos: vec![VideoLink {
            title: "Intro".into(),
            url: "https://example.com/intro".into(),
        }],
    }
}

pub fn citation(filename: &str, page: u32) -> SourceCitation {
    SourceCitation {
        filename: filename.into(),
        page: Some(page),
    }
}

pub fn pdf(name: &str) -> UploadDocument {
    UploadDocument::from_bytes(name, b"%PDF-1.7\n%fake\n".to_vec()).unwrap()
}
