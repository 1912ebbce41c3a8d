//! The dashboard view: workspace list plus lazily fetched uploads.

use std::sync::Arc;

use study_api::StudyApi;

use crate::scope::ViewScope;
use crate::session::SessionContext;
use crate::uploads::UploadsCache;
use crate::workspaces::WorkspaceStore;

pub struct Dashboard<A> {
    scope: ViewScope,
    workspaces: WorkspaceStore<A>,
    uploads: UploadsCache<A>,
}

impl<A: StudyApi> Dashboard<A> {
    #[must_use]
    pub fn mount(session: &SessionContext<A>) -> Self {
        let scope = session.scope();
        Self {
            workspaces: WorkspaceStore::new(Arc::clone(session.api()), scope.clone()),
            uploads: UploadsCache::new(Arc::clone(session.api()), scope.clone()),
            scope,
        }
    }

    #[must_use]
    pub const fn workspaces(&self) -> &WorkspaceStore<A> {
        &self.workspaces
    }

    #[must_use]
    pub const fn uploads(&self) -> &UploadsCache<A> {
        &self.uploads
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }

    /// Cancel pending requests of both parts and drop cached uploads.
    pub fn unmount(&self) {
        self.uploads.unmount();
    }
}
