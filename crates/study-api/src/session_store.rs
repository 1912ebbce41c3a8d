//! On-disk storage for the backend session cookie.
//!
//! The backend keeps the login in a cookie-backed session. The cookie header
//! for the API base URL is written after login, read at start-up, and
//! removed on logout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ApiError;

const SESSION_DIR_NAME: &str = ".studybuddy";
const SESSION_FILE_NAME: &str = "session";

/// File-backed store for the session cookie header (`name=value; name2=value2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.studybuddy/session`, or at `override_path` when non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionStore`] if no home directory can be found.
    pub fn resolve(override_path: &str) -> Result<Self, ApiError> {
        if !override_path.trim().is_empty() {
            return Ok(Self::new(override_path.trim()));
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or_else(|| {
                ApiError::SessionStore("home directory not found; cannot store session".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the cookie header with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionStore`] if the directory or file cannot be written.
    pub fn store(&self, cookies: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::SessionStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, cookies)
            .map_err(|e| ApiError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                ApiError::SessionStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    /// Load the stored cookie header. Missing or blank files yield `None`.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Remove the stored session. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionStore`] if the file exists but cannot be removed.
    pub fn delete(&self) -> Result<(), ApiError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                ApiError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}
