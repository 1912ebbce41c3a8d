//! # study-views
//!
//! Stateful views of the StudyBuddy client, written against the
//! [`study_api::StudyApi`] seam.
//!
//! - [`SessionContext`]: process-wide auth gate
//! - [`ViewRouter`]: path resolution, gating protected routes
//! - [`Dashboard`]: [`WorkspaceStore`] plus [`UploadsCache`]
//! - [`UploadFlow`]: one-at-a-time PDF submission
//! - [`ChatSession`]: per-workspace Q&A transcript
//!
//! Each mounted view owns a [`ViewScope`]; unmounting it cancels the view's
//! requests and discards late responses.

mod chat;
mod dashboard;
mod error;
mod router;
mod scope;
mod session;
mod upload_flow;
mod uploads;
mod workspaces;

pub use chat::ChatSession;
pub use dashboard::Dashboard;
pub use error::ViewError;
pub use router::{Navigation, Route, ViewRouter};
pub use scope::ViewScope;
pub use session::SessionContext;
pub use upload_flow::{UploadFlow, UploadView};
pub use uploads::{Staleness, UploadsCache};
pub use workspaces::WorkspaceStore;
