//! Error types for fanal-core.

use thiserror::Error;

/// Result type alias for fanal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for fanal operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A reduction (min/max) was requested over an empty collection.
    #[error("empty input: no {0} to process")]
    EmptyInput(&'static str),

    /// Spatial definition name that is neither `low` nor `high`.
    #[error("unknown spatial definition: '{0}' (expected 'low' or 'high')")]
    UnknownSpatialDef(String),

    /// Inconsistent fiducial volume dimensions.
    #[error("invalid fiducial volume: {0}")]
    InvalidVolume(String),

    /// Voxel edge lengths must be finite and positive.
    #[error("invalid voxel size: ({dx}, {dy}, {dz})")]
    InvalidVoxelSize { dx: f64, dy: f64, dz: f64 },

    /// Parallel arrays with different lengths.
    #[error("length mismatch: {positions} positions but {energies} energies")]
    LengthMismatch { positions: usize, energies: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
