//! Error types for grid placement and rendering.

use thiserror::Error;

use crate::geometry::{CellCoord, Dimensions};

/// Errors raised while building a grid or placing nodes into it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("cell {coord} is outside the {dimensions} grid")]
    OutOfBounds {
        coord: CellCoord,
        dimensions: Dimensions,
    },

    #[error("invalid grid dimensions: {0}")]
    Dimension(String),

    #[error("cell {0} is already occupied")]
    CellOccupied(CellCoord),
}

/// Errors raised while drawing a composition tree onto a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render target surface is unavailable")]
    SurfaceUnavailable,
}
