//! Settings for the StudyBuddy client, merged by figment.
//!
//! Later layers override earlier ones:
//!
//! | layer | source |
//! |---|---|
//! | defaults | [`StudyConfig::default`] |
//! | user | `~/.config/studybuddy/config.toml` |
//! | project | `.studybuddy/config.toml` |
//! | environment | `STUDYBUDDY_<SECTION>__<KEY>` |
//!
//! Nested keys use a double underscore: `STUDYBUDDY_API__BASE_URL` sets
//! `api.base_url` and `STUDYBUDDY_SESSION__COOKIE` sets `session.cookie`.
//!
//! ```no_run
//! let config = study_config::StudyConfig::load().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "STUDYBUDDY_";
const PROJECT_CONFIG: &str = ".studybuddy/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StudyConfig {
    /// Extract and validate the layered configuration.
    ///
    /// `.env` loading is left to the binary, which decides how to report a
    /// malformed file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Provider chain without extraction, for tests that layer extra
    /// providers or inspect a single key.
    #[must_use]
    pub fn figment() -> Figment {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        Self::user_config_path()
            .into_iter()
            .chain([PathBuf::from(PROJECT_CONFIG)])
            .filter(|path| path.exists())
            .fold(defaults, |figment, path| figment.merge(Toml::file(path)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values that figment accepts but the client cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("studybuddy").join("config.toml"))
    }
}
