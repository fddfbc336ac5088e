//! Error types for report and diagram operations.

use std::io;

use thiserror::Error;

use section_core::GeometryError;

/// Errors from the drawing backend while writing a diagram.
///
/// Saves are staged through a temporary file and persisted atomically,
/// so a failed write never leaves a partial output file behind.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The main error type for section operations.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
