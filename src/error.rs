//! Error types for maze generation and configuration

use thiserror::Error;

use crate::sim::Cell;

/// Errors raised while building a maze or its geometry.
///
/// All of these are detected before any engine body exists, so a caller that
/// sees one simply has no maze to show.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// Grid rows or columns were zero
    #[error("invalid grid dimension: {rows}x{cols} (both must be at least 1)")]
    InvalidDimension { rows: usize, cols: usize },

    /// A cell lies outside the grid
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Tried to open an edge between two cells that do not share a side
    #[error("cells {from} and {to} are not adjacent")]
    NonAdjacentCells { from: Cell, to: Cell },

    /// Edge grids do not match the declared grid size
    #[error("{which} edge grid is {got_rows}x{got_cols}, expected {want_rows}x{want_cols}")]
    DimensionMismatch {
        which: &'static str,
        got_rows: usize,
        got_cols: usize,
        want_rows: usize,
        want_cols: usize,
    },

    /// World width/height must be positive and finite
    #[error("invalid world size: {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    /// Wall thickness must be positive and finite
    #[error("invalid wall thickness: {thickness}")]
    InvalidWallThickness { thickness: f32 },

    /// Unlock gravity must point downward
    #[error("invalid unlock gravity: {gravity} (must be positive and finite)")]
    InvalidGravity { gravity: f32 },
}

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] MazeError),
}
