//! Artifact writing.
//!
//! Each artifact is written with temp-file-then-rename so a static-site
//! publisher reading the directory never observes a half-written badge:
//! 1. Write to `<name>.tmp.<pid>` in the target directory
//! 2. Fsync to disk
//! 3. Rename over the target (atomic on the same filesystem)

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::badge::Artifact;

/// Errors while writing artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written or synced.
    #[error("Failed to write {path}")]
    Write {
        /// Temp file being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The final rename failed. The temp file is left as a safety copy.
    #[error("Failed to replace {path} (new contents left at {temp_path})")]
    Rename {
        /// Target path.
        path: PathBuf,
        /// Temp file holding the new contents.
        temp_path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Write all artifacts into `dir`, creating it (and parents) if needed.
///
/// Existing files with the same names are fully replaced. Returns the
/// written paths in input order.
pub fn write_artifacts(artifacts: &[Artifact], dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    artifacts
        .iter()
        .map(|artifact| {
            let path = dir.join(artifact.file_name);
            write_atomic(&path, artifact.contents.as_bytes())?;
            tracing::info!(path = %path.display(), format = %artifact.format, "wrote artifact");
            Ok(path)
        })
        .collect()
}

/// Replace `path` with `contents` via a sibling temp file.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!("{}.tmp.{}", file_name, std::process::id()));

    let write = |temp: &Path| -> std::io::Result<()> {
        let mut file = fs::File::create(temp)?;
        file.write_all(contents)?;
        file.sync_all()
    };
    write(&temp_path).map_err(|e| OutputError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| OutputError::Rename {
        path: path.to_path_buf(),
        temp_path: temp_path.clone(),
        source: e,
    })
}
