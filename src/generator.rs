//! One run of the badge pipeline.
//!
//! ```text
//! fetch ──ok──► render_success ──► write ──► Ok(Report)
//!   └───api err──► render_failure ──► write ──► Err(Upstream)
//!   └───bad body──────────────────────────────► Err(Response)
//! ```
//!
//! There are no retries: one failed request ends the run.

use std::path::PathBuf;

use habitica_api::{Credentials, HabiticaClient, ProgressSnapshot};
use tracing::{debug, error, info, warn};

use crate::badge::{self, OutputFormat, RenderedBadge};
use crate::config::Settings;
use crate::error::BadgeError;
use crate::output;

/// Summary of a run that wrote artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The badge that was written.
    pub badge: RenderedBadge,
    /// Written files, in format order.
    pub paths: Vec<PathBuf>,
}

/// Fetch progress and write the badge artifacts.
///
/// On an upstream failure the fallback badge is written first and then
/// [`BadgeError::Upstream`] is returned, so the invoker still sees a failed
/// run while publishers always find a file.
pub async fn generate(settings: &Settings, credentials: &Credentials) -> Result<Report, BadgeError> {
    let client = HabiticaClient::new(settings.client.clone())?;
    debug!(url = %client.options().url, "fetching Habitica user");

    match client.get_progress(credentials).await {
        Ok(snapshot) => {
            info!(
                level = snapshot.level,
                percentage = snapshot.percentage(),
                "fetched Habitica progress"
            );
            let badge = badge::render_success(&snapshot, &settings.style);
            write_badge(badge, settings)
        }
        Err(habitica_api::Error::Api(api_error)) => {
            error!(
                status = ?api_error.status(),
                error = %api_error,
                "Habitica API request failed, writing fallback badge"
            );
            let badge = badge::render_failure(api_error.status(), &settings.style);
            write_badge(badge, settings)?;
            Err(BadgeError::Upstream(api_error))
        }
        Err(other) => Err(other.into()),
    }
}

/// Render and write artifacts for a snapshot supplied by the caller.
///
/// Performs no network access.
pub fn render_offline(snapshot: &ProgressSnapshot, settings: &Settings) -> Result<Report, BadgeError> {
    let badge = badge::render_success(snapshot, &settings.style);
    write_badge(badge, settings)
}

fn write_badge(badge: RenderedBadge, settings: &Settings) -> Result<Report, BadgeError> {
    if settings.formats.contains(&OutputFormat::Html) && !settings.formats.contains(&OutputFormat::Json) {
        warn!("HTML page requested without JSON; the embedded badge needs a published level.json");
    }

    let artifacts = badge::render_artifacts(&badge, &settings.formats, settings.page.as_ref())?;
    let paths = output::write_artifacts(&artifacts, &settings.out_dir)?;
    Ok(Report { badge, paths })
}
