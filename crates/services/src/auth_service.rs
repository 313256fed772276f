use std::sync::Arc;

use asked_core::model::{AuthSession, LoginDraft, RegisterDraft};
use storage::repository::SessionRepository;

use crate::backend::{BackendApi, BackendError, LoginRequest, RegisterRequest};
use crate::error::AuthError;

/// Login, registration, session restore, and logout.
///
/// Drafts are validated locally first; an invalid draft never reaches the
/// network. Successful auth persists the returned session so it survives
/// an app restart.
#[derive(Clone)]
pub struct AuthService {
    backend: Arc<dyn BackendApi>,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { backend, sessions }
    }

    /// Authenticate and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Invalid` before any network call when the
    /// draft fails validation, `AuthError::Rejected` with the backend's
    /// own message when credentials are refused, and
    /// `AuthError::LoginFailed` for transport-level failures.
    pub async fn login(&self, draft: LoginDraft) -> Result<AuthSession, AuthError> {
        draft.validate()?;
        let request = LoginRequest {
            username: draft.username.trim().to_string(),
            password: draft.password,
        };
        let session = self
            .backend
            .login(&request)
            .await
            .map_err(|err| rejected_or(err, AuthError::LoginFailed))?;
        self.sessions.save_session(&session).await?;
        Ok(session)
    }

    /// Create an account and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Same failure modes as `login`, with `AuthError::RegistrationFailed`
    /// as the transport-level fallback.
    pub async fn register(&self, draft: RegisterDraft) -> Result<AuthSession, AuthError> {
        draft.validate()?;
        let request = RegisterRequest {
            username: draft.username.trim().to_string(),
            email: draft.email.trim().to_string(),
            password: draft.password,
        };
        let session = self
            .backend
            .register(&request)
            .await
            .map_err(|err| rejected_or(err, AuthError::RegistrationFailed))?;
        self.sessions.save_session(&session).await?;
        Ok(session)
    }

    /// Load the persisted session from the previous run, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` on local store failures.
    pub async fn restore(&self) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.sessions.get_session().await?)
    }

    /// Destroy the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` on local store failures.
    pub async fn logout(&self) -> Result<(), AuthError> {
        Ok(self.sessions.clear_session().await?)
    }
}

/// A rejection carrying a backend payload is shown verbatim; anything
/// else (network failure, empty body, decode trouble) collapses to the
/// fixed fallback message.
fn rejected_or(err: BackendError, fallback: impl FnOnce(BackendError) -> AuthError) -> AuthError {
    match err {
        BackendError::Status { ref body, .. } if !body.trim().is_empty() => {
            AuthError::Rejected(body.trim().to_string())
        }
        other => fallback(other),
    }
}
