//! Error types for recolor-fill

use thiserror::Error;

/// Errors that can occur during selection and fill operations
#[derive(Debug, Error)]
pub enum FillError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] recolor_core::Error),

    /// Posterization level count below the minimum of 2
    #[error("invalid posterize levels: {0} (must be >= 2)")]
    InvalidLevels(u32),

    /// Flood-fill seed lies outside the raster
    #[error("seed out of bounds: ({x}, {y}) in {width}x{height} raster")]
    SeedOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;
