//! Habitica API credentials.
//!
//! Habitica authenticates every request with a user id and an API token,
//! both read from the environment once at startup.
//!
//! # Security
//!
//! The API token is never printed: the [`Debug`] impl redacts it, and no
//! other module in the workspace logs it.

use std::fmt;

use crate::error::CredentialError;

/// Environment variable holding the Habitica user id.
pub const ENV_VAR_USER_ID: &str = "HABITICA_USER_ID";

/// Environment variable holding the Habitica API token.
pub const ENV_VAR_API_TOKEN: &str = "HABITICA_API_TOKEN";

/// User id and API key pair sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Habitica user id (sent as `x-api-user`).
    pub user_id: String,
    /// Habitica API token (sent as `x-api-key`).
    pub api_key: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(user_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Read credentials from `HABITICA_USER_ID` and `HABITICA_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] naming the first variable that
    /// is unset or empty.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// Empty and whitespace-only values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(CredentialError::Missing(key))
        };

        Ok(Self {
            user_id: read(ENV_VAR_USER_ID)?,
            api_key: read(ENV_VAR_API_TOKEN)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
