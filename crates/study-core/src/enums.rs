//! Status enums for the stateful views.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` so the
//! views can refuse invalid transitions instead of silently corrupting state.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// GateState
// ---------------------------------------------------------------------------

/// What the client currently knows about the caller's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Never checked, or invalidated since the last check.
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl GateState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UploadStatus
// ---------------------------------------------------------------------------

/// Lifecycle of the upload view.
///
/// ```text
/// idle → submitting → ready   (idle with a result)
///                   → failed  (idle with an error)
/// ready | failed → submitting
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    #[default]
    Idle,
    Submitting,
    Ready,
    Failed,
}

impl UploadStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle | Self::Ready | Self::Failed => &[Self::Submitting],
            Self::Submitting => &[Self::Ready, Self::Failed],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether no submission is in flight.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        !matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AskStatus
// ---------------------------------------------------------------------------

/// Lifecycle of the chat view's ask trigger.
///
/// ```text
/// idle → asking → idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskStatus {
    #[default]
    Idle,
    Asking,
}

impl AskStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Asking],
            Self::Asking => &[Self::Idle],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Asking => "asking",
        }
    }
}

impl fmt::Display for AskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UploadStatus::Idle, UploadStatus::Submitting, true)]
    #[case(UploadStatus::Ready, UploadStatus::Submitting, true)]
    #[case(UploadStatus::Failed, UploadStatus::Submitting, true)]
    #[case(UploadStatus::Submitting, UploadStatus::Ready, true)]
    #[case(UploadStatus::Submitting, UploadStatus::Failed, true)]
    #[case(UploadStatus::Submitting, UploadStatus::Submitting, false)]
    #[case(UploadStatus::Idle, UploadStatus::Ready, false)]
    #[case(UploadStatus::Ready, UploadStatus::Failed, false)]
    fn upload_transitions(#[case] from: UploadStatus, #[case] to: UploadStatus, #[case] allowed: bool) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn only_submitting_is_busy() {
        assert!(UploadStatus::Idle.is_idle());
        assert!(UploadStatus::Ready.is_idle());
        assert!(UploadStatus::Failed.is_idle());
        assert!(!UploadStatus::Submitting.is_idle());
    }

    #[test]
    fn ask_cannot_nest() {
        assert!(AskStatus::Idle.can_transition_to(AskStatus::Asking));
        assert!(!AskStatus::Asking.can_transition_to(AskStatus::Asking));
    }

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&UploadStatus::Submitting).unwrap(), r#""submitting""#);
        assert_eq!(serde_json::to_string(&GateState::Unauthenticated).unwrap(), r#""unauthenticated""#);
        assert_eq!(AskStatus::Asking.to_string(), "asking");
    }
}
