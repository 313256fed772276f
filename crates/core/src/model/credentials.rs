use thiserror::Error;

/// Local validation failures for the auth forms. These block the network
/// call entirely; the messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CredentialError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Login form contents, validated before submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    /// Checks required-field presence.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::MissingFields` if either field is blank.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        Ok(())
    }
}

/// Registration form contents, validated before submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterDraft {
    /// Checks required fields, password confirmation, and minimum length.
    ///
    /// # Errors
    ///
    /// Returns the first failing `CredentialError`. Confirmation is
    /// checked before length so a mismatch is reported even when both
    /// entries are short.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(CredentialError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(CredentialError::PasswordMismatch);
        }
        if self.password.chars().count() < 6 {
            return Err(CredentialError::PasswordTooShort);
        }
        Ok(())
    }
}
