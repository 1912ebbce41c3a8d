//! `/auth/*` endpoints.

use study_core::entities::{Credentials, SessionUser};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, decode};

impl ApiClient {
    /// `GET /auth/me`: the user behind the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when there is no valid session, or
    /// any transport/decoding error.
    pub async fn current_user(&self) -> Result<SessionUser, ApiError> {
        tracing::debug!("checking session");
        let resp = check_response(self.http.get(self.endpoint("/auth/me")).send().await?).await?;
        decode(resp).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when the username is taken (the backend
    /// answers 400 or 409), or any transport error.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        tracing::debug!(username = %credentials.username, "registering");
        let resp = self
            .http
            .post(self.endpoint("/auth/register"))
            .json(credentials)
            .send()
            .await?;
        check_response(resp).await.map_err(registration_error)?;
        Ok(())
    }

    /// `POST /auth/login`. On success the session cookie is persisted when a
    /// session store is attached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] on 401, or any transport or
    /// session-store error.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        tracing::debug!(username = %credentials.username, "logging in");
        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        check_response(resp).await.map_err(|e| match e {
            ApiError::Unauthorized => ApiError::InvalidCredentials,
            other => other,
        })?;
        self.persist_session()
    }

    /// `POST /auth/logout`. The stored session is removed even when the
    /// backend call fails, so a dead session never lingers on disk.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the logout request failed, otherwise any
    /// session-store error.
    pub async fn logout(&self) -> Result<(), ApiError> {
        tracing::debug!("logging out");
        let result = match self.http.post(self.endpoint("/auth/logout")).send().await {
            Ok(resp) => check_response(resp).await.map(|_| ()),
            Err(e) => Err(ApiError::from(e)),
        };
        self.forget_session()?;
        result
    }
}

fn registration_error(error: ApiError) -> ApiError {
    match error {
        ApiError::Api { status: 400 | 409, message } => ApiError::Conflict(message),
        other => other,
    }
}
