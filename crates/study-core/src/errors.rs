//! Cross-cutting error types for StudyBuddy.
//!
//! Domain-specific errors (`ApiError`, `ViewError`, `ConfigError`) are defined
//! in their respective crates. They converge into `anyhow` in `study-cli`.

use thiserror::Error;

/// Errors that can be raised by any StudyBuddy crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    /// Data failed validation before it was sent anywhere.
    #[error("Validation error: {0}")]
    Validation(String),
}
