use serde::{Deserialize, Serialize};

/// A logged-in user's bearer token and display name.
///
/// Created on successful login or registration, persisted locally,
/// destroyed on logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub username: String,
}

impl AuthSession {
    #[must_use]
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}
