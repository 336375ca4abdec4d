//! Error types for the simulation core.

use thiserror::Error;

use crate::grid::Cell;

/// Errors raised by simulation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    /// Coordinate outside the grid
    #[error("cell ({}, {}) is outside the {width}x{height} grid", .cell.col, .cell.row)]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    /// Grid with a zero dimension
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidGrid { width: u32, height: u32 },

    /// Intensity outside [0, 1] or not a number
    #[error("intensity {0} is outside [0, 1]")]
    InvalidIntensity(f64),

    /// Pattern index with no preset behind it
    #[error("no pattern with index {0}")]
    UnknownPattern(usize),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for simulation operations
pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
