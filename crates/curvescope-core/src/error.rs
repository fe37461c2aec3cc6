//! Error types for curvescope-rs.

use thiserror::Error;

/// The main error type for curvescope-rs operations.
#[derive(Error, Debug)]
pub enum CurvescopeError {
    /// A mode identifier outside the closed set of known modes.
    #[error("unknown render mode '{0}' - expected one of: mesh, contour, fieldLines, gravitationalWaves")]
    UnknownMode(String),

    /// Grid sample count does not match `resolution^3`.
    #[error("grid sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Grid resolution is too small to build any geometry.
    #[error("grid resolution {0} is too small (minimum is 2)")]
    EmptyGrid(u32),

    /// Grid bounding box has zero or negative extent on some axis.
    #[error("degenerate grid bounds: min {min:?}, max {max:?}")]
    DegenerateBounds { min: [f32; 3], max: [f32; 3] },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for curvescope-rs operations.
pub type Result<T> = std::result::Result<T, CurvescopeError>;
