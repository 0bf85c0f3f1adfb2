//! TOML configuration schema types for habitica-badge.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty file is a valid configuration.
//!
//! Duration fields use human-readable strings (e.g. `"30s"`, `"2m"`)
//! parsed by the `humantime` crate when settings are resolved.

use serde::{Deserialize, Serialize};

use crate::badge::OutputFormat;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [api]
/// [badge]
/// [output]
/// [pages]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Upstream API settings.
    pub api: ApiConfig,
    /// Badge presentation.
    pub badge: BadgeStyle,
    /// Where and what to write.
    pub output: OutputConfig,
    /// HTML landing page settings.
    pub pages: PagesConfig,
}

// ---------------------------------------------------------------------------
// API
// ---------------------------------------------------------------------------

/// Habitica API settings from the `[api]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// User endpoint URL.
    pub url: String,
    /// Application name sent in the `x-client` header.
    pub client_name: String,
    /// Request timeout as a humantime duration. Empty means no timeout.
    pub timeout: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: habitica_api::USER_API_URL.to_string(),
            client_name: habitica_api::DEFAULT_CLIENT_NAME.to_string(),
            timeout: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// Shields presentation fields from the `[badge]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BadgeStyle {
    /// Left-hand badge text.
    pub label: String,
    /// Badge color on success (any shields color name or hex).
    pub color: String,
    /// Badge color when the API call failed.
    pub error_color: String,
    /// Include the character class in the message.
    pub show_class: bool,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: "Habitica".to_string(),
            color: "purple".to_string(),
            error_color: "red".to_string(),
            show_class: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Artifact output settings from the `[output]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory unless absolute.
    /// Tilde (~) is expanded.
    pub dir: String,
    /// Artifact formats to write.
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
            formats: vec![OutputFormat::Json, OutputFormat::Html],
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Landing page settings from the `[pages]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PagesConfig {
    /// Page title and heading.
    pub title: String,
    /// Public base URL where `level.json` is served. Empty means derive it
    /// from `GITHUB_REPOSITORY_OWNER` and `GITHUB_REPOSITORY`.
    pub site_url: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            title: "Habitica Badge".to_string(),
            site_url: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r##"
[api]
url = "http://localhost:8080/api/v3/user"
client_name = "my-badge"
timeout = "20s"

[badge]
label = "HabitRPG"
color = "#6133b4"
error_color = "orange"
show_class = true

[output]
dir = "site/badges"
formats = ["svg", "json"]

[pages]
title = "My Progress"
site_url = "https://example.org/badges"
"##;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.api.url, "http://localhost:8080/api/v3/user");
        assert_eq!(config.api.client_name, "my-badge");
        assert_eq!(config.api.timeout, "20s");
        assert_eq!(config.badge.label, "HabitRPG");
        assert_eq!(config.badge.color, "#6133b4");
        assert_eq!(config.badge.error_color, "orange");
        assert!(config.badge.show_class);
        assert_eq!(config.output.dir, "site/badges");
        assert_eq!(
            config.output.formats,
            vec![OutputFormat::Svg, OutputFormat::Json]
        );
        assert_eq!(config.pages.title, "My Progress");
        assert_eq!(config.pages.site_url, "https://example.org/badges");
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[badge]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.badge, BadgeStyle::default());
    }

    #[test]
    fn default_badge_matches_shields_defaults() {
        let style = BadgeStyle::default();
        assert_eq!(style.label, "Habitica");
        assert_eq!(style.color, "purple");
        assert_eq!(style.error_color, "red");
        assert!(!style.show_class);
    }

    #[test]
    fn default_output_writes_json_and_html_to_public() {
        let output = OutputConfig::default();
        assert_eq!(output.dir, "public");
        assert_eq!(output.formats, vec![OutputFormat::Json, OutputFormat::Html]);
    }

    #[test]
    fn default_api_points_at_habitica() {
        let api = ApiConfig::default();
        assert_eq!(api.url, "https://habitica.com/api/v3/user");
        assert!(api.timeout.is_empty());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = toml::from_str::<Config>("[output]\nformats = [\"png\"]\n");
        assert!(result.is_err());
    }
}
