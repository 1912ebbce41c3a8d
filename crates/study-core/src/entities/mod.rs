//! Entity structs for the StudyBuddy backend data model.
//!
//! Shapes follow the JSON bodies of the backend endpoints. Decoding is lenient
//! where the backend is known to emit `null` for empty values; encoding is
//! canonical.

mod account;
mod chat;
mod upload;
mod workspace;

pub use account::{Credentials, SessionUser};
pub use chat::{ChatReply, ChatTurn, SourceCitation};
pub use upload::{StudyPlan, UploadResult, VideoLink};
pub use workspace::{NewWorkspace, Workspace};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
