use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::WorkspaceId;

/// A student's named study container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub title: String,
    #[serde(default, with = "deadline_format")]
    pub deadline: Option<NaiveDate>,
}

/// Payload of `POST /workspaces/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewWorkspace {
    pub title: String,
    #[serde(with = "deadline_format")]
    pub deadline: Option<NaiveDate>,
}

impl NewWorkspace {
    /// Build a creation request. The title is sent as typed; only a blank one
    /// is refused.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn new(title: &str, deadline: Option<NaiveDate>) -> Result<Self, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("workspace title must not be empty".into()));
        }
        Ok(Self {
            title: title.to_string(),
            deadline,
        })
    }
}

/// Deadlines travel as `YYYY-MM-DD`; the list endpoint renders stored
/// datetimes as `YYYY-MM-DDTHH:MM:SS`, so only the date part is kept.
mod deadline_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid deadline '{raw}': {e}")))
    }
}
