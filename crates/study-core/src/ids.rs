//! Opaque identifiers assigned by the backend.
//!
//! The backend currently issues integer keys, but the client never does
//! arithmetic on them: identifiers are carried as strings so a path segment
//! like `/chat/7` can be passed through verbatim.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned workspace identifier. Never changes once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for WorkspaceId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<u64> for WorkspaceId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for WorkspaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wire_id(deserializer).map(Self)
    }
}

/// Decode an identifier that may arrive as a JSON number or a JSON string.
pub(crate) fn wire_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Unsigned(u64),
        Signed(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
