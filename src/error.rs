//! Error types for trajectory generation

use thiserror::Error;

/// Errors raised while building or checking a trajectory
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// The time to traverse was zero, negative, non-finite or outside the configured window
    #[error("invalid duration {duration}: must be finite and strictly positive")]
    InvalidDuration { duration: f64 },

    /// A boundary state did not hold exactly three finite components, or the
    /// pair produced a residual that overflows
    #[error("malformed boundary state: {reason}")]
    MalformedBoundaryState { reason: String },

    /// Two coefficient sequences of different length were compared
    #[error("incorrect number of terms: expected {expected}, found {found}")]
    ComparisonLengthMismatch { expected: usize, found: usize },

    /// The linear solve for the high-order coefficients failed or produced a
    /// non-finite result, e.g. when powers of a tiny duration underflow to zero
    #[error("coefficient matrix is singular for duration {duration}")]
    SingularSystem { duration: f64 },

    /// A configuration or sampling parameter was rejected
    #[error("invalid value {value} for parameter `{name}`")]
    InvalidParameter { name: String, value: f64 },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TrajectoryError>;
