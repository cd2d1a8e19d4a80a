//! Coefficient comparison used to accept solver output against known trajectories

use tracing::warn;

use crate::error::{Result, TrajectoryError};

/// Tolerance used by [`close_enough_default`]
pub const DEFAULT_EPS: f64 = 0.01;

/// True if both sequences have the same length and every pair of terms is within `eps`
///
/// A length mismatch is a caller bug and is reported as an error rather than
/// truncating the comparison.
pub fn close_enough<P, T>(poly: P, target: T, eps: f64) -> Result<bool>
where
    P: AsRef<[f64]>,
    T: AsRef<[f64]>,
{
    let (poly, target) = (poly.as_ref(), target.as_ref());
    if poly.len() != target.len() {
        return Err(TrajectoryError::ComparisonLengthMismatch {
            expected: target.len(),
            found: poly.len(),
        });
    }

    for (index, (term, target_term)) in poly.iter().zip(target).enumerate() {
        let diff = (term - target_term).abs();
        if diff > eps || diff.is_nan() {
            warn!(index, term, target_term, diff, eps, "term differs from target by more than eps");
            return Ok(false);
        }
    }
    Ok(true)
}

/// [`close_enough`] with [`DEFAULT_EPS`]
pub fn close_enough_default<P, T>(poly: P, target: T) -> Result<bool>
where
    P: AsRef<[f64]>,
    T: AsRef<[f64]>,
{
    close_enough(poly, target, DEFAULT_EPS)
}
