//! Rendering and host-interaction errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while producing or delivering a bill document.
///
/// Each user action maps to at most one of these; partial output files are
/// left in place for inspection, never cleaned up here.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Drawing or serializing the PDF failed.
    #[error("failed to draw bill document: {0}")]
    Pdf(String),

    /// The destination could not be created or written.
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spawning the host's default document viewer failed.
    #[error("failed to launch document viewer")]
    Viewer(#[source] std::io::Error),

    /// No known "open with default handler" command on this platform.
    #[error("opening documents is not supported on this platform")]
    UnsupportedPlatform,
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
