//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# habitica-badge configuration
#
# All values shown below are the built-in defaults.
# Credentials are never read from this file: set HABITICA_USER_ID and
# HABITICA_API_TOKEN in the environment instead.
#
# Location: $XDG_CONFIG_HOME/habitica-badge/config.toml

# ==============================================================================
# Habitica API
# ==============================================================================

[api]

# User endpoint queried once per run.
url = "https://habitica.com/api/v3/user"

# Application name sent as `x-client: <user id>-<client_name>`.
client_name = "habitica-badge"

# Request timeout as a human-readable duration. Empty means no timeout.
# Examples: "10s", "1m"
timeout = ""

# ==============================================================================
# Badge
# ==============================================================================

[badge]

# Left-hand text of the badge.
label = "Habitica"

# Color on success and on API failure (shields color names or hex).
color = "purple"
error_color = "red"

# Include the character class in the message, e.g. "Level 10 wizard • 75% XP".
show_class = false

# ==============================================================================
# Output
# ==============================================================================

[output]

# Directory the artifacts are written to. Created if missing.
dir = "public"

# Artifacts to write.
# Options: "json" (level.json), "html" (index.html), "svg" (level.svg)
formats = ["json", "html"]

# ==============================================================================
# Landing page
# ==============================================================================

[pages]

# Title and heading of index.html.
title = "Habitica Badge"

# Public URL where level.json is served.
# Empty means https://<GITHUB_REPOSITORY_OWNER>.github.io/<repo name>.
site_url = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Same as [`create_default_config`] for an explicit path.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)
}

/// Writes the default template to `path`, creating parent dirs.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;

    #[test]
    fn template_values_match_config_default() {
        let from_template: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(from_template, Config::default());
    }

    #[test]
    fn template_contains_all_section_headers() {
        for section in ["[api]", "[badge]", "[output]", "[pages]"] {
            assert!(
                DEFAULT_CONFIG_TEMPLATE.contains(section),
                "missing {section} section"
            );
        }
    }

    #[test]
    fn create_writes_template() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("config.toml");
        create_default_config_at(&path, false).expect("should create");
        let content = fs::read_to_string(&path).expect("should read back");
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn create_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine").expect("write");
        let err = create_default_config_at(&path, false).expect_err("should refuse");
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&path).expect("read"), "# mine");
    }

    #[test]
    fn create_with_force_backs_up_existing() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine").expect("write");
        create_default_config_at(&path, true).expect("should overwrite");
        assert_eq!(
            fs::read_to_string(dir.path().join("config.toml.backup")).expect("backup"),
            "# mine"
        );
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            DEFAULT_CONFIG_TEMPLATE
        );
    }
}
