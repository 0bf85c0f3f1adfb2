//! Top-level error type and exit-code policy.
//!
//! | Exit | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | Badge written from fresh data                             |
//! | 1    | Unhandled failure (bad response body, write failure, ...) |
//! | 2    | Configuration error, nothing fetched or written           |
//! | 3    | Upstream failure, fallback badge written                  |

use std::process::ExitCode;

use thiserror::Error;

use crate::badge::RenderError;
use crate::config::ConfigError;
use crate::output::OutputError;

/// Exit code for unhandled failures.
pub const EXIT_UNHANDLED: u8 = 1;

/// Exit code for configuration errors.
pub const EXIT_CONFIG: u8 = 2;

/// Exit code for upstream failures after the fallback badge was written.
pub const EXIT_UPSTREAM: u8 = 3;

/// Everything that can end a run unsuccessfully.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// Configuration or credentials are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Habitica API call failed. The fallback badge has been written.
    #[error("Habitica API request failed: {0}")]
    Upstream(#[source] habitica_api::ApiError),

    /// The response body was not a usable user document.
    #[error("Unusable Habitica response: {0}")]
    Response(String),

    /// The HTTP client could not be built.
    #[error("{0}")]
    Client(String),

    /// A badge could not be serialized.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An artifact could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl BadgeError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BadgeError::Config(_) => EXIT_CONFIG,
            BadgeError::Upstream(_) => EXIT_UPSTREAM,
            BadgeError::Response(_)
            | BadgeError::Client(_)
            | BadgeError::Render(_)
            | BadgeError::Output(_) => EXIT_UNHANDLED,
        }
    }
}

impl From<&BadgeError> for ExitCode {
    fn from(err: &BadgeError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

impl From<habitica_api::Error> for BadgeError {
    fn from(err: habitica_api::Error) -> Self {
        match err {
            habitica_api::Error::Credential(e) => BadgeError::Config(e.into()),
            habitica_api::Error::Api(e) => BadgeError::Upstream(e),
            habitica_api::Error::Parse(msg) => BadgeError::Response(msg),
            habitica_api::Error::Client(msg) => BadgeError::Client(msg),
        }
    }
}
