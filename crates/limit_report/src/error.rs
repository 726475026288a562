//! Reporting errors.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Failure while writing a report artefact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Directory creation failed.
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed.
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// The bundled font could not be registered with the text renderer.
    #[error("Font error: {0}")]
    Font(String),

    /// Nothing to plot.
    #[error("Empty series: {0}")]
    EmptySeries(&'static str),
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(err.to_string())
    }
}
