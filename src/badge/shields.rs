//! shields.io endpoint document.
//!
//! See <https://shields.io/badges/endpoint-badge> for the schema. Only the
//! fields we set are serialized; `isError` is omitted on success.

use serde::{Deserialize, Serialize};

use super::RenderedBadge;

/// The endpoint schema version shields.io understands.
pub const SCHEMA_VERSION: u8 = 1;

/// A shields.io endpoint document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointBadge {
    /// Always [`SCHEMA_VERSION`].
    pub schema_version: u8,
    /// Left-hand text.
    pub label: String,
    /// Right-hand text.
    pub message: String,
    /// Right-hand color.
    pub color: String,
    /// Marks the badge as an error so shields.io does not cache it.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&RenderedBadge> for EndpointBadge {
    fn from(badge: &RenderedBadge) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            label: badge.label.clone(),
            message: badge.message.clone(),
            color: badge.color.clone(),
            is_error: badge.is_error(),
        }
    }
}

/// Serialize a badge as a compact shields endpoint document.
pub fn to_json(badge: &RenderedBadge) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EndpointBadge::from(badge))
}
