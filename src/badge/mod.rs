//! Badge rendering.
//!
//! Turns a [`ProgressSnapshot`] (or an upstream failure) into a
//! [`RenderedBadge`], then serializes that badge into one or more
//! [`Artifact`]s. Everything here is pure: no I/O, no clock, so the same
//! input always yields byte-identical artifacts.
//!
//! # Formats
//!
//! | Format | File         | Contents                               |
//! |--------|--------------|----------------------------------------|
//! | JSON   | `level.json` | shields.io endpoint document           |
//! | HTML   | `index.html` | landing page embedding the shields URL |
//! | SVG    | `level.svg`  | standalone progress bar                |

use std::fmt;

use habitica_api::ProgressSnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::schema::BadgeStyle;
use crate::config::PageSettings;

/// HTML landing page.
pub mod html;

/// shields.io endpoint JSON.
pub mod shields;

/// Standalone SVG progress bar.
pub mod svg;

/// File name of the shields endpoint document.
pub const JSON_FILE: &str = "level.json";

/// File name of the landing page.
pub const HTML_FILE: &str = "index.html";

/// File name of the SVG badge.
pub const SVG_FILE: &str = "level.svg";

/// Artifact formats the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// shields.io endpoint JSON (`level.json`).
    Json,
    /// HTML landing page (`index.html`).
    Html,
    /// Standalone SVG (`level.svg`).
    Svg,
}

impl OutputFormat {
    /// Fixed file name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => JSON_FILE,
            OutputFormat::Html => HTML_FILE,
            OutputFormat::Svg => SVG_FILE,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
        };
        write!(f, "{}", s)
    }
}

/// What a badge reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// Progress fetched successfully.
    Progress {
        /// Current level.
        level: u32,
    },
    /// The upstream call failed; this is the fallback badge.
    Failure {
        /// Upstream HTTP status, `None` for transport failures.
        status: Option<u16>,
    },
}

/// A badge ready to be serialized into any [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBadge {
    /// Success or fallback.
    pub kind: BadgeKind,
    /// Progress towards the next level, always in `0..=100`.
    pub percentage: u8,
    /// Left-hand text.
    pub label: String,
    /// Right-hand text.
    pub message: String,
    /// Right-hand background color.
    pub color: String,
}

impl RenderedBadge {
    /// `true` for the fallback badge.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, BadgeKind::Failure { .. })
    }
}

/// Render the success badge for a progress snapshot.
///
/// The message reads `Level {level} • {percentage}% XP`, with the class
/// inserted after the level when `style.show_class` is set.
pub fn render_success(snapshot: &ProgressSnapshot, style: &BadgeStyle) -> RenderedBadge {
    let percentage = snapshot.percentage();
    let message = match snapshot.class.as_deref() {
        Some(class) if style.show_class => {
            format!("Level {} {} • {}% XP", snapshot.level, class, percentage)
        }
        _ => format!("Level {} • {}% XP", snapshot.level, percentage),
    };

    RenderedBadge {
        kind: BadgeKind::Progress {
            level: snapshot.level,
        },
        percentage,
        label: style.label.clone(),
        message,
        color: style.color.clone(),
    }
}

/// Render the fallback badge for a failed upstream call.
pub fn render_failure(status: Option<u16>, style: &BadgeStyle) -> RenderedBadge {
    let message = match status {
        Some(code) => format!("API error {}", code),
        None => "API error".to_string(),
    };

    RenderedBadge {
        kind: BadgeKind::Failure { status },
        percentage: 0,
        label: style.label.clone(),
        message,
        color: style.error_color.clone(),
    }
}

/// Serialized badge contents bound for a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Format the contents are in.
    pub format: OutputFormat,
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// File contents.
    pub contents: String,
}

/// Errors while serializing a badge.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("Failed to serialize badge JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// HTML was requested without page settings.
    #[error("HTML output requested without page settings")]
    MissingPage,
}

/// Serialize `badge` into every requested format, once per format.
///
/// # Errors
///
/// Returns [`RenderError::MissingPage`] if HTML is requested and `page` is
/// `None`, and [`RenderError::Json`] if JSON serialization fails.
pub fn render_artifacts(
    badge: &RenderedBadge,
    formats: &[OutputFormat],
    page: Option<&PageSettings>,
) -> Result<Vec<Artifact>, RenderError> {
    let mut artifacts: Vec<Artifact> = Vec::with_capacity(formats.len());

    for &format in formats {
        if artifacts.iter().any(|a| a.format == format) {
            continue;
        }
        let contents = match format {
            OutputFormat::Json => shields::to_json(badge)?,
            OutputFormat::Html => html::render_page(page.ok_or(RenderError::MissingPage)?),
            OutputFormat::Svg => svg::render_svg(badge),
        };
        artifacts.push(Artifact {
            format,
            file_name: format.file_name(),
            contents,
        });
    }

    Ok(artifacts)
}

/// Escape text for inclusion in HTML or XML content and attribute values.
pub(crate) fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
