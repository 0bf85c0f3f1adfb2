//! habitica-badge library
//!
//! Fetches a Habitica user's level progress and writes it as static badge
//! artifacts: a shields.io endpoint JSON, an HTML landing page, and/or a
//! standalone SVG progress bar.
//!
//! The binary is a thin wrapper: it resolves [`config::Settings`] once,
//! then calls [`generator::generate`] (or [`generator::render_offline`]).
//! Rendering in [`badge`] is pure and can be used on its own.

/// Badge rendering and per-format serializers.
pub mod badge;

/// Configuration file, CLI overrides, and validated settings.
pub mod config;

/// Top-level error type and exit codes.
pub mod error;

/// The fetch, render, and write pipeline.
pub mod generator;

/// Tracing subscriber setup.
pub mod logging;

/// Atomic artifact writing.
pub mod output;

pub use badge::{render_failure, render_success, BadgeKind, OutputFormat, RenderedBadge};
pub use config::{Config, Overrides, Settings};
pub use error::BadgeError;
pub use generator::{generate, render_offline, Report};
