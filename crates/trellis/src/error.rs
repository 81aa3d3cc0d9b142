//! Error types for Trellis operations.
//!
//! Rendering itself cannot fail; [`TrellisError`] covers the surface around
//! it: configuration, theme resolution, diagram lookup and file output.

use std::io;

use thiserror::Error;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Unknown diagram `{name}`, expected one of: {expected}")]
    UnknownDiagram { name: String, expected: String },
}
