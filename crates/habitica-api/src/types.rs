//! Type definitions for Habitica user API responses.
//!
//! Only the fields needed for progress badges are declared; serde ignores
//! the rest of the (very large) user document.

use serde::Deserialize;

/// Envelope returned by `GET /api/v3/user`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserResponse {
    /// The user document.
    pub data: UserData,
}

/// The subset of the user document we read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserData {
    /// Character statistics.
    pub stats: UserStats,
}

/// Character statistics as reported by Habitica.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserStats {
    /// Current level.
    pub lvl: u32,

    /// Experience earned within the current level.
    #[serde(default)]
    pub exp: Option<f64>,

    /// Experience needed to reach the next level.
    #[serde(default, rename = "toNextLevel")]
    pub to_next_level: Option<f64>,

    /// Character class (`warrior`, `wizard`, `healer`, `rogue`).
    #[serde(default)]
    pub class: Option<String>,
}

/// A user's standing at fetch time.
///
/// Built fresh from every fetch and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Current level.
    pub level: u32,
    /// Current experience points.
    pub experience: f64,
    /// Experience required for the next level. Never zero or NaN.
    pub experience_to_next: f64,
    /// Character class, if the user picked one.
    pub class: Option<String>,
}

impl ProgressSnapshot {
    /// Build a snapshot, normalizing the experience values.
    ///
    /// Non-finite experience becomes `0`. A zero or NaN `experience_to_next`
    /// becomes `1` so the percentage is always defined. Negative and infinite
    /// values are kept; the percentage then clamps to `0` for non-negative
    /// experience.
    pub fn new(level: u32, experience: f64, experience_to_next: f64) -> Self {
        Self {
            level,
            experience: if experience.is_finite() { experience } else { 0.0 },
            experience_to_next: normalize_to_next(Some(experience_to_next)),
            class: None,
        }
    }

    /// Attach a character class. Blank names are treated as no class.
    pub fn with_class(mut self, class: Option<String>) -> Self {
        self.class = class
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    /// Percentage of the way to the next level, in `0..=100`.
    ///
    /// `round(100 * experience / experience_to_next)`, clamped. Safe for any
    /// field values, including ones set directly on the struct.
    pub fn percentage(&self) -> u8 {
        let to_next = normalize_to_next(Some(self.experience_to_next));
        let raw = (self.experience / to_next * 100.0).round();
        if raw.is_nan() {
            0
        } else {
            raw.clamp(0.0, 100.0) as u8
        }
    }
}

impl From<UserStats> for ProgressSnapshot {
    fn from(stats: UserStats) -> Self {
        ProgressSnapshot::new(
            stats.lvl,
            stats.exp.unwrap_or(0.0),
            normalize_to_next(stats.to_next_level),
        )
        .with_class(stats.class)
    }
}

/// Missing, zero and NaN values become `1`.
fn normalize_to_next(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() && v != 0.0 => v,
        _ => 1.0,
    }
}
