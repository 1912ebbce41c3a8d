//! Session cookie storage configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie to send instead of the stored one (`name=value`,
    /// several separated by `;`). Intended for CI and scripting.
    #[serde(default)]
    pub cookie: String,

    /// Override for the session file location. Empty means
    /// `~/.studybuddy/session`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Whether a cookie override is set.
    #[must_use]
    pub fn has_cookie_override(&self) -> bool {
        !self.cookie.trim().is_empty()
    }
}
