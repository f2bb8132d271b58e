//! Error types for Strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps
//! the error conditions that can occur while loading, laying out and
//! writing diagrams.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Strata operations.
///
/// # Diagnostic Variants
///
/// The `Manifest` variant keeps the manifest source and the byte span of
/// the offending TOML so callers can point at the exact location.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no layers supplied for diagram `{title}`")]
    EmptyLayers { title: String },

    #[error("invalid canvas {width}x{height}: both dimensions must be positive")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Invalid manifest: {message}")]
    Manifest {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl StrataError {
    /// Create a new `Manifest` error from a TOML error and the manifest source.
    pub fn new_manifest_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Manifest {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
