//! Per-workspace cache of processed uploads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use study_api::StudyApi;
use study_core::entities::UploadResult;
use study_core::ids::WorkspaceId;

use crate::error::ViewError;
use crate::scope::ViewScope;

/// When cached entries go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Staleness {
    /// Entries never expire; they change only on fetch, evict or clear.
    #[default]
    Manual,
}

/// Upload lists keyed by workspace.
///
/// An entry is absent until its workspace is fetched. Each fetch overwrites
/// the whole entry (last write wins) and never touches other keys.
pub struct UploadsCache<A> {
    api: Arc<A>,
    scope: ViewScope,
    staleness: Staleness,
    entries: Mutex<HashMap<WorkspaceId, Vec<UploadResult>>>,
}

impl<A: StudyApi> UploadsCache<A> {
    #[must_use]
    pub fn new(api: Arc<A>, scope: ViewScope) -> Self {
        Self {
            api,
            scope,
            staleness: Staleness::Manual,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<WorkspaceId, Vec<UploadResult>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn staleness(&self) -> Staleness {
        self.staleness
    }

    /// Fetch uploads for `workspace` and store them under its key.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; the existing entry is kept.
    pub async fn fetch(&self, workspace: &WorkspaceId) -> Result<Vec<UploadResult>, ViewError> {
        let uploads = self.scope.request(self.api.list_uploads(workspace)).await?;
        tracing::debug!(%workspace, count = uploads.len(), "uploads fetched");
        self.entries().insert(workspace.clone(), uploads.clone());
        Ok(uploads)
    }

    pub fn get(&self, workspace: &WorkspaceId) -> Option<Vec<UploadResult>> {
        self.entries().get(workspace).cloned()
    }

    pub fn contains(&self, workspace: &WorkspaceId) -> bool {
        self.entries().contains_key(workspace)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drop one workspace's entry, returning it.
    pub fn evict(&self, workspace: &WorkspaceId) -> Option<Vec<UploadResult>> {
        self.entries().remove(workspace)
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Unmount the owning scope and drop every entry. In-flight fetches are
    /// cancelled and never written.
    pub fn unmount(&self) {
        self.scope.unmount();
        self.clear();
    }
}
