//! Configuration error types for loading, parsing, and resolving settings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the run configuration.
///
/// Every variant is fatal and is reported before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Path that was requested but does not exist.
        path: PathBuf,
    },

    /// A configuration file already exists at the target path.
    #[error("Configuration file already exists: {path}")]
    AlreadyExists {
        /// Path where the file already exists.
        path: PathBuf,
    },

    /// Failed to write a configuration file to disk.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Required Habitica credentials are absent.
    #[error(transparent)]
    Credentials(#[from] habitica_api::CredentialError),

    /// A duration field could not be parsed.
    #[error("Invalid duration for {field}: '{value}' ({message})")]
    InvalidDuration {
        /// Dotted config key, e.g. `api.timeout`.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Parser message.
        message: String,
    },

    /// The HTML page was requested but no public site URL could be determined.
    #[error(
        "HTML output needs a site URL: set pages.site_url or GITHUB_REPOSITORY_OWNER and GITHUB_REPOSITORY"
    )]
    MissingSiteUrl,

    /// No output formats were selected.
    #[error("No output formats selected")]
    NoFormats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_read_error() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/habitica-badge/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("/etc/habitica-badge/config.toml"),
            "ReadError display should include the path"
        );
        assert!(
            msg.contains("Failed to read"),
            "ReadError display should describe the failure"
        );
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("config.toml"),
            line: 5,
            column: 12,
            message: "expected `=`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("5:12"), "ParseError should include line:column");
        assert!(
            msg.contains("expected `=`"),
            "ParseError should include the message"
        );
    }

    #[test]
    fn display_not_found_error() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/missing/config.toml"),
        };
        assert!(err.to_string().contains("/missing/config.toml"));
    }

    #[test]
    fn display_missing_credentials_names_variable() {
        let err: ConfigError =
            habitica_api::CredentialError::Missing(habitica_api::ENV_VAR_USER_ID).into();
        assert!(err.to_string().contains("HABITICA_USER_ID"));
    }

    #[test]
    fn display_invalid_duration() {
        let err = ConfigError::InvalidDuration {
            field: "api.timeout",
            value: "soon".to_string(),
            message: "expected number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("api.timeout"));
        assert!(msg.contains("soon"));
    }

    #[test]
    fn display_missing_site_url_mentions_fix() {
        let msg = ConfigError::MissingSiteUrl.to_string();
        assert!(msg.contains("pages.site_url"));
        assert!(msg.contains("GITHUB_REPOSITORY"));
    }

    #[test]
    fn write_error_source_chain() {
        let err = ConfigError::WriteError {
            path: PathBuf::from("/secret"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some(), "WriteError should chain the I/O source");
    }
}
