//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps the
//! failures of every stage: reading input, querying the trace, building
//! grids and rendering.

use std::io;

use thiserror::Error;

use trellis_core::error::{GridError, RenderError};

use crate::trace::TraceError;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),

    #[error("Layout error: {0}")]
    Grid(#[from] GridError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}
