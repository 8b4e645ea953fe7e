//! Snapshot export error types.

use thiserror::Error;

/// Errors that can occur while capturing or encoding a snapshot.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Download could not be started: {0}")]
    DownloadFailed(String),
}
