//! Standalone SVG progress bar.
//!
//! Unlike the JSON endpoint this needs no external renderer: the file can be
//! embedded directly. Layout (all integer pixels, so output is stable):
//!
//! ```text
//! +-----------+---------------------------+
//! |  label    |#########  Lv 10 • 75%     |
//! +-----------+---------------------------+
//!  LABEL_WIDTH         TRACK_WIDTH
//! ```

use super::{escape_markup, BadgeKind, RenderedBadge};

/// Total canvas width.
pub const BADGE_WIDTH: u32 = 240;

/// Canvas height.
pub const BADGE_HEIGHT: u32 = 28;

/// Width of the label section.
pub const LABEL_WIDTH: u32 = 80;

/// Width of the progress track.
pub const TRACK_WIDTH: u32 = BADGE_WIDTH - LABEL_WIDTH;

/// Text shown on the track of a fallback badge.
pub const ERROR_TEXT: &str = "API Error";

const LABEL_BACKGROUND: &str = "#555";
const TRACK_BACKGROUND: &str = "#7a7a7a";
const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
const FONT_SIZE: u32 = 11;
/// Rough Verdana advance at 11px, used to decide when to squeeze the label.
const CHAR_WIDTH: u32 = 7;
const TEXT_PADDING: u32 = 10;

/// Width of the filled part of the track for a percentage.
pub fn fill_width(percentage: u8) -> u32 {
    TRACK_WIDTH * u32::from(percentage.min(100)) / 100
}

/// Render a badge as a self-contained SVG document.
///
/// The badge color is used as an SVG paint, so it should be a CSS color
/// name or hex value.
pub fn render_svg(badge: &RenderedBadge) -> String {
    let (fill, text) = match badge.kind {
        BadgeKind::Progress { level } => (
            fill_width(badge.percentage),
            format!("Lv {} • {}%", level, badge.percentage),
        ),
        BadgeKind::Failure { .. } => (TRACK_WIDTH, ERROR_TEXT.to_string()),
    };

    let title = escape_markup(&format!("{}: {}", badge.label, badge.message));
    let label = escape_markup(&badge.label);
    let text = escape_markup(&text);
    let color = escape_markup(&badge.color);

    let label_x = LABEL_WIDTH / 2;
    let track_x = LABEL_WIDTH + TRACK_WIDTH / 2;
    let text_y = BADGE_HEIGHT / 2 + FONT_SIZE / 2 - 1;
    let label_fit = fit_attr(&badge.label, LABEL_WIDTH);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{title}">
<title>{title}</title>
<clipPath id="r"><rect width="{w}" height="{h}" rx="4"/></clipPath>
<g clip-path="url(#r)">
<rect width="{lw}" height="{h}" fill="{LABEL_BACKGROUND}"/>
<rect x="{lw}" width="{tw}" height="{h}" fill="{TRACK_BACKGROUND}"/>
<rect x="{lw}" width="{fill}" height="{h}" fill="{color}"/>
</g>
<g fill="#fff" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}" text-anchor="middle">
<text x="{label_x}" y="{text_y}"{label_fit}>{label}</text>
<text x="{track_x}" y="{text_y}">{text}</text>
</g>
</svg>
"##,
        w = BADGE_WIDTH,
        h = BADGE_HEIGHT,
        lw = LABEL_WIDTH,
        tw = TRACK_WIDTH,
    )
}

/// `textLength` attribute squeezing `text` into `width`, or nothing if it fits.
fn fit_attr(text: &str, width: u32) -> String {
    let available = width.saturating_sub(TEXT_PADDING);
    let estimated = text.chars().count() as u32 * CHAR_WIDTH;
    if estimated > available {
        format!(r#" textLength="{available}" lengthAdjust="spacingAndGlyphs""#)
    } else {
        String::new()
    }
}
