//! Error type for the section CLI.

use std::io;

use thiserror::Error;

use section::SectionError;
use section_core::GeometryError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid vertex list: {0}")]
    Input(String),

    #[error("configuration error: {0}")]
    Config(String),
}
