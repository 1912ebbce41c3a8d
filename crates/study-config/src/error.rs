//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, parsed, or merged.
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but holds a value the client cannot use.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
