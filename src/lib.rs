//! Jerk minimizing trajectory generation
//!
//! Given the position, velocity and acceleration of a vehicle at the start and
//! end of a manoeuvre and the time it should take, [`solve`] returns the
//! quintic polynomial that meets both boundary conditions.
//!
//! ```
//! use jmt_core::{close_enough_default, solve, BoundaryState};
//!
//! let start = BoundaryState::new(0.0, 10.0, 0.0);
//! let end = BoundaryState::new(20.0, 15.0, 20.0);
//! let poly = solve(start, end, 2.0).unwrap();
//!
//! assert!(close_enough_default(poly, [0.0, 10.0, 0.0, 0.0, -0.625, 0.3125]).unwrap());
//! ```
pub mod common;
pub mod control;
pub mod error;

pub use crate::common::BoundaryState;
pub use crate::control::trajectory::{
    close_enough, close_enough_default, solve, DefaultTrajectorySolver, GaussianQuinticSolver,
    InverseQuinticSolver, Polynomial, TrajectorySolver, DEFAULT_EPS,
};
pub use crate::error::{Result, TrajectoryError};
