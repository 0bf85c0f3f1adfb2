//! Minimal landing page embedding the shields.io badge.
//!
//! The page points shields.io at the published `level.json`, so it is only
//! useful once the output directory is served at `site_url` (for example by
//! GitHub Pages).

use reqwest::Url;

use super::{escape_markup, JSON_FILE};
use crate::config::PageSettings;

/// shields.io endpoint-badge renderer.
pub const SHIELDS_ENDPOINT: &str = "https://img.shields.io/endpoint";

/// Public URL of the published endpoint document.
pub fn json_url(site_url: &str) -> String {
    format!("{}/{}", site_url.trim_end_matches('/'), JSON_FILE)
}

/// shields.io image URL rendering the endpoint document at `site_url`.
///
/// The `url` query parameter is percent-encoded.
pub fn shields_url(site_url: &str) -> String {
    let target = json_url(site_url);
    Url::parse_with_params(SHIELDS_ENDPOINT, [("url", target.as_str())])
        .map(String::from)
        .unwrap_or_else(|_| format!("{SHIELDS_ENDPOINT}?url={target}"))
}

/// Render the landing page.
pub fn render_page(page: &PageSettings) -> String {
    let title = escape_markup(&page.title);
    let image = escape_markup(&shields_url(&page.site_url));
    let endpoint = escape_markup(&json_url(&page.site_url));

    format!(
        r#"<!doctype html>
<html lang="en">
<meta charset="utf-8">
<title>{title}</title>
<h1>{title}</h1>
<img src="{image}" alt="{title}">
<p>Embed the image URL above (for example with /embed in Notion), or point any shields endpoint badge at <code>{endpoint}</code>.</p>
</html>
"#
    )
}
