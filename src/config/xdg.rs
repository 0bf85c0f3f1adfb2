//! Platform-aware path resolution for habitica-badge.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/habitica-badge` or `~/.config/habitica-badge`.
//!
//! On **macOS**, uses `~/Library/Application Support/habitica-badge` unless
//! `$XDG_CONFIG_HOME` is set.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "habitica-badge";

/// Returns the configuration directory for habitica-badge.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/habitica-badge` (if env var set and non-empty)
/// 2. Platform default
pub fn config_dir() -> PathBuf {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_NAME),
        _ => platform_config_dir().join(APP_NAME),
    }
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, or no home directory is known, it is
/// returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if path == "~" => home,
        _ => PathBuf::from(path),
    }
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    #[serial(xdg)]
    fn config_dir_respects_xdg_config_home() {
        with_xdg_config(Some("/custom/config"), || {
            assert_eq!(config_dir(), PathBuf::from("/custom/config/habitica-badge"));
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/habitica-badge/config.toml")
            );
        });
    }

    #[test]
    #[serial(xdg)]
    fn config_dir_ignores_empty_xdg_config_home() {
        with_xdg_config(Some(""), || {
            assert!(config_dir().ends_with("habitica-badge"));
            assert_ne!(config_dir(), PathBuf::from("habitica-badge"));
        });
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("public"), PathBuf::from("public"));
        assert_eq!(expand_tilde("/srv/www"), PathBuf::from("/srv/www"));
    }

    #[test]
    fn expand_tilde_expands_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/badges"), home.join("badges"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).expect("should create nested dirs");
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir(&nested).expect("should be idempotent");
    }
}
