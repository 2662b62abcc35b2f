//! Error types for portmark generation and delivery.
//!
//! URL parse failures never show up here: the filename converter recovers from
//! them locally.

use std::path::PathBuf;
use thiserror::Error;

/// Building the portmark content failed.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no URL to redirect to")]
    EmptyUrl,
}

/// Handing the portmark to the download sink failed.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("refusing unsafe filename {0:?}")]
    InvalidFilename(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DownloadError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Any failure that reaches the top level and is reported to the user.
#[derive(Debug, Error)]
pub enum PortmarkError {
    #[error("failed to generate portmark: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to download file: {0}")]
    Download(#[from] DownloadError),
}
