//! Quintic solver using LU decomposition with partial pivoting

use std::collections::HashMap;

use tracing::debug;

use super::polynomial::Polynomial;
use super::{assemble, DurationLimits, QuinticSystem, TrajectorySolver};
use crate::common::BoundaryState;
use crate::error::{Result, TrajectoryError};

/// Default solver: Gaussian elimination on the 3x3 system
#[derive(Debug, Clone, Default)]
pub struct GaussianQuinticSolver {
    limits: DurationLimits,
}

impl GaussianQuinticSolver {
    /// Current duration window
    pub fn limits(&self) -> &DurationLimits {
        &self.limits
    }
}

impl TrajectorySolver for GaussianQuinticSolver {
    fn new() -> Self {
        GaussianQuinticSolver {
            limits: DurationLimits::default(),
        }
    }

    fn solve(&self, start: BoundaryState, end: BoundaryState, duration: f64) -> Result<Polynomial> {
        let system = QuinticSystem::checked(&self.limits, start, end, duration)?;

        let high = system
            .a
            .lu()
            .solve(&system.b)
            .ok_or(TrajectoryError::SingularSystem { duration })?;

        let poly = assemble(start, &high, duration)?;
        debug!(solver = self.name(), duration, coefficients = ?poly.coefficients(), "solved quintic");
        Ok(poly)
    }

    fn name(&self) -> &str {
        "GaussianQuinticSolver"
    }

    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        self.limits.configure(params)?;
        debug!(solver = self.name(), limits = ?self.limits, "configured");
        Ok(())
    }
}
