use std::fmt;

use serde::{Deserialize, Serialize};

/// Username/password pair for `/auth/register` and `/auth/login`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    #[serde(deserialize_with = "crate::ids::wire_id")]
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("ada", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ada"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn session_user_accepts_numeric_id() {
        let user: SessionUser = serde_json::from_str(r#"{"id": 4, "username": "ada"}"#).unwrap();
        assert_eq!(user.id, "4");
    }
}
