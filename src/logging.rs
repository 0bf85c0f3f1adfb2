//! Logging initialization for habitica-badge.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `HABITICA_BADGE_LOG` environment variable. Falls back to `info` level
//! when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! habitica-badge generate
//!
//! # Debug level
//! HABITICA_BADGE_LOG=debug habitica-badge generate
//!
//! # Module-specific filtering
//! HABITICA_BADGE_LOG=habitica_badge=debug,warn habitica-badge generate
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "HABITICA_BADGE_LOG";

/// Initialize the tracing subscriber.
///
/// Reads `HABITICA_BADGE_LOG` for filter directives and falls back to `info`
/// when the variable is unset or invalid. Output goes to stderr so stdout
/// stays free for command output.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
