//! Common utilities and types for trajectory generation

use crate::error::{Result, TrajectoryError};

/// Common types used across the codebase
pub mod types {
    /// A raw (position, velocity, acceleration) triple
    pub type StateTuple = (f64, f64, f64);

    /// Quintic coefficients ordered by ascending power of t
    pub type Coefficients = [f64; 6];
}

/// Position, velocity and acceleration at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryState {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl BoundaryState {
    /// Create a new boundary state
    pub fn new(position: f64, velocity: f64, acceleration: f64) -> Self {
        BoundaryState {
            position,
            velocity,
            acceleration,
        }
    }

    /// True when all three components are finite
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}

impl From<types::StateTuple> for BoundaryState {
    fn from((position, velocity, acceleration): types::StateTuple) -> Self {
        BoundaryState::new(position, velocity, acceleration)
    }
}

impl From<[f64; 3]> for BoundaryState {
    fn from([position, velocity, acceleration]: [f64; 3]) -> Self {
        BoundaryState::new(position, velocity, acceleration)
    }
}

impl TryFrom<&[f64]> for BoundaryState {
    type Error = TrajectoryError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [position, velocity, acceleration] => {
                Ok(BoundaryState::new(*position, *velocity, *acceleration))
            }
            _ => Err(TrajectoryError::MalformedBoundaryState {
                reason: format!("expected 3 components, found {}", values.len()),
            }),
        }
    }
}
