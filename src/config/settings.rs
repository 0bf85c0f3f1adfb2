//! Runtime settings resolved once at startup.
//!
//! [`Settings::resolve`] merges the TOML [`Config`], command-line
//! [`Overrides`], and environment lookups into a validated value that the
//! generator takes by reference. All validation happens here, so a bad
//! configuration fails before any network activity.

use std::path::PathBuf;
use std::time::Duration;

use habitica_api::ClientOptions;

use crate::badge::OutputFormat;
use crate::config::error::ConfigError;
use crate::config::schema::{BadgeStyle, Config};
use crate::config::xdg;

/// GitHub Actions variable holding the repository owner.
pub const ENV_REPOSITORY_OWNER: &str = "GITHUB_REPOSITORY_OWNER";

/// GitHub Actions variable holding `owner/name`.
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Output directory.
    pub out_dir: Option<PathBuf>,
    /// Output formats. Empty means use the config file.
    pub formats: Vec<OutputFormat>,
}

/// Settings for the HTML landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Page title and heading.
    pub title: String,
    /// Public base URL serving `level.json`, without a trailing slash.
    pub site_url: String,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// HTTP client options.
    pub client: ClientOptions,
    /// Badge presentation.
    pub style: BadgeStyle,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Formats to render, deduplicated, in the order given.
    pub formats: Vec<OutputFormat>,
    /// Present exactly when [`OutputFormat::Html`] is selected.
    pub page: Option<PageSettings>,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env(config: Config, overrides: Overrides) -> Result<Self, ConfigError> {
        Self::resolve(config, overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings, reading environment values through `lookup`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDuration`] if `api.timeout` is not a duration
    /// - [`ConfigError::NoFormats`] if the format list is empty
    /// - [`ConfigError::MissingSiteUrl`] if HTML is requested and no site URL
    ///   is configured or derivable from the GitHub variables
    pub fn resolve<F>(config: Config, overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = parse_timeout(&config.api.timeout)?;

        let requested = if overrides.formats.is_empty() {
            config.output.formats
        } else {
            overrides.formats
        };
        let formats = dedup_formats(requested);
        if formats.is_empty() {
            return Err(ConfigError::NoFormats);
        }

        let page = if formats.contains(&OutputFormat::Html) {
            let site_url = resolve_site_url(&config.pages.site_url, &lookup)
                .ok_or(ConfigError::MissingSiteUrl)?;
            Some(PageSettings {
                title: config.pages.title,
                site_url,
            })
        } else {
            None
        };

        let out_dir = overrides
            .out_dir
            .unwrap_or_else(|| xdg::expand_tilde(&config.output.dir));

        Ok(Self {
            client: ClientOptions {
                url: config.api.url,
                client_name: config.api.client_name,
                user_agent: format!("habitica-badge/{}", env!("CARGO_PKG_VERSION")),
                timeout,
            },
            style: config.badge,
            out_dir,
            formats,
            page,
        })
    }
}

/// Empty means no timeout.
fn parse_timeout(value: &str) -> Result<Option<Duration>, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    humantime::parse_duration(value)
        .map(Some)
        .map_err(|e| ConfigError::InvalidDuration {
            field: "api.timeout",
            value: value.to_string(),
            message: e.to_string(),
        })
}

fn dedup_formats(formats: Vec<OutputFormat>) -> Vec<OutputFormat> {
    let mut seen = Vec::with_capacity(formats.len());
    for format in formats {
        if !seen.contains(&format) {
            seen.push(format);
        }
    }
    seen
}

/// Explicit URL first, then `https://{owner}.github.io/{repo}`.
fn resolve_site_url<F>(configured: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let configured = configured.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return Some(configured.to_string());
    }

    let owner = lookup(ENV_REPOSITORY_OWNER).filter(|o| !o.trim().is_empty())?;
    let repository = lookup(ENV_REPOSITORY)?;
    let name = repository
        .split_once('/')
        .map(|(_, name)| name)
        .unwrap_or(&repository)
        .trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("https://{}.github.io/{}", owner.trim(), name))
}
