//! Trajectory generation module
//!
//! Jerk minimizing trajectories: a quintic s(t) that matches position,
//! velocity and acceleration at t = 0 and at t = T. The three low-order
//! coefficients come straight from the start state; the three high-order ones
//! solve a 3x3 linear system built from T.

use std::collections::HashMap;
use std::fmt::Debug;

use nalgebra::{Matrix3, Vector3};

use crate::common::BoundaryState;
use crate::error::{Result, TrajectoryError};

pub mod compare;
pub mod gaussian;
pub mod inverse;
pub mod polynomial;

pub use self::compare::{close_enough, close_enough_default, DEFAULT_EPS};
pub use self::gaussian::GaussianQuinticSolver;
pub use self::inverse::InverseQuinticSolver;
pub use self::polynomial::Polynomial;

// Default implementation
pub use self::gaussian::GaussianQuinticSolver as DefaultTrajectorySolver;

/// Trait for quintic trajectory solvers
pub trait TrajectorySolver: Debug + Send + Sync {
    /// Create a new instance with default parameters
    fn new() -> Self
    where
        Self: Sized;

    /// Compute the quintic joining `start` at t = 0 to `end` at t = `duration`
    fn solve(&self, start: BoundaryState, end: BoundaryState, duration: f64) -> Result<Polynomial>;

    /// Get the name of this solver
    fn name(&self) -> &str;

    /// Configure the solver with parameters
    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()>;
}

/// Solve with the default solver and default limits
pub fn solve(start: BoundaryState, end: BoundaryState, duration: f64) -> Result<Polynomial> {
    DefaultTrajectorySolver::new().solve(start, end, duration)
}

/// Window of accepted durations, exclusive below and inclusive above
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationLimits {
    pub min_duration: f64,
    pub max_duration: f64,
}

impl Default for DurationLimits {
    fn default() -> Self {
        DurationLimits {
            min_duration: 0.0,
            max_duration: f64::MAX,
        }
    }
}

impl DurationLimits {
    /// Apply `min_duration` / `max_duration` from a parameter map
    ///
    /// Either both values are accepted or the limits are left untouched.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        let min_duration = params.get("min_duration").copied().unwrap_or(self.min_duration);
        let max_duration = params.get("max_duration").copied().unwrap_or(self.max_duration);

        if !min_duration.is_finite() || min_duration < 0.0 {
            return Err(TrajectoryError::InvalidParameter {
                name: "min_duration".to_string(),
                value: min_duration,
            });
        }
        if max_duration.is_nan() || max_duration <= min_duration {
            return Err(TrajectoryError::InvalidParameter {
                name: "max_duration".to_string(),
                value: max_duration,
            });
        }

        self.min_duration = min_duration;
        self.max_duration = max_duration;
        Ok(())
    }

    /// Reject durations outside the window
    pub fn check(&self, duration: f64) -> Result<()> {
        if !duration.is_finite() || duration <= self.min_duration.max(0.0) || duration > self.max_duration {
            return Err(TrajectoryError::InvalidDuration { duration });
        }
        Ok(())
    }
}

/// The 3x3 system `a * [c3, c4, c5] = b` for one pair of boundary states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuinticSystem {
    pub a: Matrix3<f64>,
    pub b: Vector3<f64>,
}

impl QuinticSystem {
    /// Build the system for `start` -> `end` over `t`
    ///
    /// Rows of `a` are the position, velocity and acceleration contributions of
    /// the cubic and higher terms at t; `b` is what those terms must supply.
    pub fn new(start: BoundaryState, end: BoundaryState, t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let t5 = t4 * t;

        #[rustfmt::skip]
        let a = Matrix3::new(
            t3,        t4,         t5,
            3.0 * t2,  4.0 * t3,   5.0 * t4,
            6.0 * t,   12.0 * t2,  20.0 * t3,
        );

        let b = Vector3::new(
            end.position - (start.position + start.velocity * t + 0.5 * start.acceleration * t2),
            end.velocity - (start.velocity + start.acceleration * t),
            end.acceleration - start.acceleration,
        );

        QuinticSystem { a, b }
    }

    /// Validate inputs and build the system
    pub fn checked(
        limits: &DurationLimits,
        start: BoundaryState,
        end: BoundaryState,
        duration: f64,
    ) -> Result<Self> {
        limits.check(duration)?;
        for (label, state) in [("start", start), ("end", end)] {
            if !state.is_finite() {
                return Err(TrajectoryError::MalformedBoundaryState {
                    reason: format!("{} state has non-finite component: {:?}", label, state),
                });
            }
        }

        let system = QuinticSystem::new(start, end, duration);
        // T^5 overflows long before f64::MAX
        if !system.a.iter().all(|v| v.is_finite()) {
            return Err(TrajectoryError::InvalidDuration { duration });
        }
        if !system.b.iter().all(|v| v.is_finite()) {
            return Err(TrajectoryError::MalformedBoundaryState {
                reason: format!(
                    "residual overflows for {:?} -> {:?} over {}",
                    start, end, duration
                ),
            });
        }
        Ok(system)
    }
}

/// Combine the start state with the solved high-order terms
///
/// A non-finite solution means the system was numerically singular, usually
/// because powers of a tiny duration underflowed.
pub(crate) fn assemble(
    start: BoundaryState,
    high: &Vector3<f64>,
    duration: f64,
) -> Result<Polynomial> {
    if !high.iter().all(|v| v.is_finite()) {
        return Err(TrajectoryError::SingularSystem { duration });
    }
    Ok(Polynomial::new([
        start.position,
        start.velocity,
        start.acceleration / 2.0,
        high[0],
        high[1],
        high[2],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn system_matches_closed_form_rows() {
        let start = BoundaryState::new(0.0, 10.0, 0.0);
        let end = BoundaryState::new(20.0, 15.0, 20.0);
        let system = QuinticSystem::new(start, end, 2.0);

        assert_eq!(system.a.row(0).iter().copied().collect::<Vec<_>>(), vec![8.0, 16.0, 32.0]);
        assert_eq!(system.a.row(1).iter().copied().collect::<Vec<_>>(), vec![12.0, 32.0, 80.0]);
        assert_eq!(system.a.row(2).iter().copied().collect::<Vec<_>>(), vec![12.0, 48.0, 160.0]);

        assert_abs_diff_eq!(system.b[0], 0.0);
        assert_abs_diff_eq!(system.b[1], 5.0);
        assert_abs_diff_eq!(system.b[2], 20.0);
    }

    #[test]
    fn default_limits_only_require_positive() {
        let limits = DurationLimits::default();
        assert!(limits.check(1e-6).is_ok());
        assert!(limits.check(1e6).is_ok());
        for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                limits.check(bad),
                Err(TrajectoryError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn configure_narrows_the_window() {
        let mut limits = DurationLimits::default();
        limits
            .configure(&params(&[("min_duration", 0.5), ("max_duration", 10.0)]))
            .unwrap();
        assert!(limits.check(0.5).is_err());
        assert!(limits.check(0.51).is_ok());
        assert!(limits.check(10.0).is_ok());
        assert!(limits.check(10.01).is_err());
    }

    #[test]
    fn configure_rejects_bad_values_atomically() {
        let mut limits = DurationLimits::default();
        let before = limits;

        let err = limits
            .configure(&params(&[("min_duration", -1.0)]))
            .unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidParameter { ref name, .. } if name == "min_duration"));

        let err = limits
            .configure(&params(&[("min_duration", 5.0), ("max_duration", 1.0)]))
            .unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidParameter { ref name, .. } if name == "max_duration"));

        assert_eq!(limits, before);
    }

    #[test]
    fn configure_ignores_unknown_keys() {
        let mut limits = DurationLimits::default();
        limits.configure(&params(&[("lookahead_distance", 0.8)])).unwrap();
        assert_eq!(limits, DurationLimits::default());
    }

    #[test]
    fn checked_rejects_non_finite_states() {
        let limits = DurationLimits::default();
        let good = BoundaryState::new(0.0, 0.0, 0.0);
        let bad = BoundaryState::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            QuinticSystem::checked(&limits, bad, good, 1.0),
            Err(TrajectoryError::MalformedBoundaryState { .. })
        ));
        assert!(matches!(
            QuinticSystem::checked(&limits, good, bad, 1.0),
            Err(TrajectoryError::MalformedBoundaryState { .. })
        ));
    }

    #[test]
    fn checked_rejects_overflowing_duration() {
        let limits = DurationLimits::default();
        let state = BoundaryState::default();
        assert!(matches!(
            QuinticSystem::checked(&limits, state, state, 1e100),
            Err(TrajectoryError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn checked_rejects_overflowing_residual() {
        let limits = DurationLimits::default();
        let start = BoundaryState::new(0.0, 1e308, 0.0);
        let end = BoundaryState::default();
        assert!(matches!(
            QuinticSystem::checked(&limits, start, end, 10.0),
            Err(TrajectoryError::MalformedBoundaryState { .. })
        ));
        assert!(matches!(
            solve(start, end, 10.0),
            Err(TrajectoryError::MalformedBoundaryState { .. })
        ));
    }

    #[test]
    fn assemble_rejects_non_finite_solution() {
        let start = BoundaryState::new(1.0, 2.0, 4.0);
        for high in [
            Vector3::new(f64::NAN, 0.0, 0.0),
            Vector3::new(0.0, f64::INFINITY, 0.0),
            Vector3::new(0.0, 0.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(
                assemble(start, &high, 0.5),
                Err(TrajectoryError::SingularSystem { duration: 0.5 })
            );
        }

        let poly = assemble(start, &Vector3::new(3.0, 4.0, 5.0), 0.5).unwrap();
        assert_eq!(poly.coefficients(), &[1.0, 2.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn free_solve_uses_default_solver() {
        let poly = solve((0.0, 10.0, 0.0).into(), (10.0, 10.0, 0.0).into(), 1.0).unwrap();
        assert_eq!(poly.coefficients(), &[0.0, 10.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
