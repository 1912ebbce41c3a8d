//! Path-to-view routing with the auth gate in front of protected views.

use std::fmt;
use std::sync::Arc;

use study_api::StudyApi;
use study_core::ids::WorkspaceId;

use crate::session::SessionContext;

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Upload(WorkspaceId),
    Chat(WorkspaceId),
}

impl Route {
    /// Parse a path such as `/upload/7`.
    ///
    /// The workspace parameter is taken verbatim. A single trailing slash is
    /// ignored. Unknown paths and empty parameters yield `None`.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::Dashboard);
        }
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        match rest.split_once('/') {
            None => match rest {
                "dashboard" => Some(Self::Dashboard),
                "login" => Some(Self::Login),
                "register" => Some(Self::Register),
                _ => None,
            },
            Some((head, param)) => {
                if param.is_empty() || param.contains('/') {
                    return None;
                }
                let id = WorkspaceId::new(param);
                match head {
                    "upload" => Some(Self::Upload(id)),
                    "chat" => Some(Self::Chat(id)),
                    _ => None,
                }
            }
        }
    }

    /// Whether the view requires an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Upload(_) | Self::Chat(_))
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/".to_string(),
            Self::Upload(id) => format!("/upload/{id}"),
            Self::Chat(id) => format!("/chat/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Mount the view for this route.
    Mount(Route),
    /// The gate refused; show this route instead.
    Redirect(Route),
    /// No view matches the path.
    NotFound(String),
}

pub struct ViewRouter<A> {
    session: Arc<SessionContext<A>>,
}

impl<A: StudyApi> ViewRouter<A> {
    #[must_use]
    pub const fn new(session: Arc<SessionContext<A>>) -> Self {
        Self { session }
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<SessionContext<A>> {
        &self.session
    }

    /// Resolve `path` and apply the auth gate.
    pub async fn navigate(&self, path: &str) -> Navigation {
        let Some(route) = Route::resolve(path) else {
            tracing::debug!(path, "no route");
            return Navigation::NotFound(path.to_string());
        };
        self.enter(route).await
    }

    /// Apply the auth gate to an already-resolved route.
    pub async fn enter(&self, route: Route) -> Navigation {
        if route.is_protected() && !self.session.is_authenticated().await {
            tracing::debug!(%route, "redirecting to login");
            return Navigation::Redirect(Route::Login);
        }
        Navigation::Mount(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/", Some(Route::Dashboard))]
    #[case("/login", Some(Route::Login))]
    #[case("/register", Some(Route::Register))]
    #[case("/dashboard", Some(Route::Dashboard))]
    #[case("/dashboard/", Some(Route::Dashboard))]
    #[case("/upload/7", Some(Route::Upload(WorkspaceId::new("7"))))]
    #[case("/chat/abc-1", Some(Route::Chat(WorkspaceId::new("abc-1"))))]
    #[case("/upload/", None)]
    #[case("/upload/7/extra", None)]
    #[case("/settings", None)]
    #[case("dashboard", None)]
    #[case("//", None)]
    #[case("", None)]
    #[case("/chat/7/", Some(Route::Chat(WorkspaceId::new("7"))))]
    #[case("/chat//", None)]
    fn resolves_paths(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(Route::resolve(path), expected);
    }

    #[test]
    fn only_workspace_views_and_dashboard_are_protected() {
        assert!(!Route::Login.is_protected());
        assert!(!Route::Register.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Upload(WorkspaceId::new("1")).is_protected());
        assert!(Route::Chat(WorkspaceId::new("1")).is_protected());
    }

    #[test]
    fn path_resolves_back_to_same_route() {
        let route = Route::Chat(WorkspaceId::new("42"));
        assert_eq!(route.path(), "/chat/42");
        assert_eq!(Route::resolve(&route.path()), Some(route));
    }
}
