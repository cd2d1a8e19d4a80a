//! Quintic solver that inverts the coefficient matrix explicitly

use std::collections::HashMap;

use tracing::debug;

use super::polynomial::Polynomial;
use super::{assemble, DurationLimits, QuinticSystem, TrajectorySolver};
use crate::common::BoundaryState;
use crate::error::{Result, TrajectoryError};

/// Computes `A^-1 * b` directly
#[derive(Debug, Clone, Default)]
pub struct InverseQuinticSolver {
    limits: DurationLimits,
}

impl InverseQuinticSolver {
    /// Current duration window
    pub fn limits(&self) -> &DurationLimits {
        &self.limits
    }
}

impl TrajectorySolver for InverseQuinticSolver {
    fn new() -> Self {
        InverseQuinticSolver {
            limits: DurationLimits::default(),
        }
    }

    fn solve(&self, start: BoundaryState, end: BoundaryState, duration: f64) -> Result<Polynomial> {
        let system = QuinticSystem::checked(&self.limits, start, end, duration)?;

        let inverse = system
            .a
            .try_inverse()
            .ok_or(TrajectoryError::SingularSystem { duration })?;
        let high = inverse * system.b;

        let poly = assemble(start, &high, duration)?;
        debug!(solver = self.name(), duration, coefficients = ?poly.coefficients(), "solved quintic");
        Ok(poly)
    }

    fn name(&self) -> &str {
        "InverseQuinticSolver"
    }

    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        self.limits.configure(params)?;
        debug!(solver = self.name(), limits = ?self.limits, "configured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::trajectory::GaussianQuinticSolver;
    use approx::assert_abs_diff_eq;

    #[test]
    fn agrees_with_gaussian_elimination() {
        let inverse = InverseQuinticSolver::new();
        let gaussian = GaussianQuinticSolver::new();
        let cases = [
            ((0.0, 10.0, 0.0), (20.0, 15.0, 20.0), 2.0),
            ((5.0, 10.0, 2.0), (-30.0, -20.0, -4.0), 5.0),
            ((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), 0.25),
        ];
        for (start, end, t) in cases {
            let a = inverse.solve(start.into(), end.into(), t).unwrap();
            let b = gaussian.solve(start.into(), end.into(), t).unwrap();
            for i in 0..Polynomial::LEN {
                assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn rest_to_rest_unit_move() {
        // classic minimum jerk profile: 10t^3 - 15t^4 + 6t^5
        let poly = InverseQuinticSolver::new()
            .solve((0.0, 0.0, 0.0).into(), (1.0, 0.0, 0.0).into(), 1.0)
            .unwrap();
        assert_abs_diff_eq!(poly[3], 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(poly[4], -15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(poly[5], 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(poly.position(0.5), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn shares_duration_validation() {
        let mut solver = InverseQuinticSolver::new();
        let state = BoundaryState::default();
        assert!(matches!(
            solver.solve(state, state, -2.0),
            Err(TrajectoryError::InvalidDuration { .. })
        ));

        let params: HashMap<String, f64> = [("max_duration".to_string(), 2.0)].into_iter().collect();
        solver.configure(&params).unwrap();
        assert_eq!(solver.limits().max_duration, 2.0);
        assert!(solver.solve(state, state, 3.0).is_err());
        assert_eq!(solver.name(), "InverseQuinticSolver");
    }

    #[test]
    fn underflowing_duration_is_singular() {
        let solver = InverseQuinticSolver::new();
        for t in [1e-65, 1e-70, 1e-100] {
            assert_eq!(
                solver.solve((0.0, 0.0, 0.0).into(), (1.0, 0.0, 0.0).into(), t),
                Err(TrajectoryError::SingularSystem { duration: t })
            );
        }
    }
}
