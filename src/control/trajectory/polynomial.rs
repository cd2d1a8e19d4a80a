//! Quintic polynomial produced by the trajectory solvers

use std::fmt;
use std::ops::Index;

use crate::common::types::Coefficients;
use crate::common::BoundaryState;
use crate::error::{Result, TrajectoryError};

/// A quintic s(t) = c0 + c1*t + c2*t^2 + c3*t^3 + c4*t^4 + c5*t^5
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Coefficients,
}

impl Polynomial {
    /// Number of coefficients in every quintic
    pub const LEN: usize = 6;

    /// Upper bound on the number of points [`Polynomial::sample`] returns
    pub const MAX_SAMPLES: usize = 1_000_000;

    /// Create a polynomial from coefficients ordered by ascending power
    pub fn new(coeffs: Coefficients) -> Self {
        Polynomial { coeffs }
    }

    /// Coefficients ordered by ascending power
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    /// Always 6
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Never true, a quintic always has six terms
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position s(t)
    pub fn position(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5]))))
    }

    /// Velocity s'(t)
    pub fn velocity(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        c[1] + t * (2.0 * c[2] + t * (3.0 * c[3] + t * (4.0 * c[4] + t * 5.0 * c[5])))
    }

    /// Acceleration s''(t)
    pub fn acceleration(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        2.0 * c[2] + t * (6.0 * c[3] + t * (12.0 * c[4] + t * 20.0 * c[5]))
    }

    /// Jerk s'''(t)
    pub fn jerk(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        6.0 * c[3] + t * (24.0 * c[4] + t * 60.0 * c[5])
    }

    /// Position, velocity and acceleration at time t
    pub fn state_at(&self, t: f64) -> BoundaryState {
        BoundaryState::new(self.position(t), self.velocity(t), self.acceleration(t))
    }

    /// State at t = 0, read directly from the low-order coefficients
    pub fn start_state(&self) -> BoundaryState {
        BoundaryState::new(self.coeffs[0], self.coeffs[1], 2.0 * self.coeffs[2])
    }

    /// Coefficients of s'(t), ordered by ascending power
    pub fn derivative(&self) -> [f64; 5] {
        let mut out = [0.0; 5];
        for (power, coeff) in self.coeffs.iter().enumerate().skip(1) {
            out[power - 1] = power as f64 * coeff;
        }
        out
    }

    /// Sample the state every `step` seconds over `[start, end]`
    ///
    /// The first sample is taken at `start`; the last one at the largest
    /// multiple of `step` not exceeding `end`.
    pub fn sample(&self, start: f64, end: f64, step: f64) -> Result<Vec<(f64, BoundaryState)>> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TrajectoryError::InvalidParameter {
                name: "step".to_string(),
                value: step,
            });
        }
        if !start.is_finite() {
            return Err(TrajectoryError::InvalidParameter {
                name: "start".to_string(),
                value: start,
            });
        }
        if !end.is_finite() || end < start {
            return Err(TrajectoryError::InvalidParameter {
                name: "end".to_string(),
                value: end,
            });
        }

        // Small slack so an end that lands on a step is not lost to rounding
        let intervals = ((end - start) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= Self::MAX_SAMPLES as f64 {
            return Err(TrajectoryError::InvalidParameter {
                name: "step".to_string(),
                value: step,
            });
        }
        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|i| {
                let t = start + i as f64 * step;
                (t, self.state_at(t))
            })
            .collect())
    }

    /// True if every coefficient is within `eps` of the other polynomial's
    pub fn close_to(&self, other: &Polynomial, eps: f64) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl From<Coefficients> for Polynomial {
    fn from(coeffs: Coefficients) -> Self {
        Polynomial::new(coeffs)
    }
}

impl From<Polynomial> for Coefficients {
    fn from(poly: Polynomial) -> Self {
        poly.coeffs
    }
}

impl AsRef<[f64]> for Polynomial {
    fn as_ref(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s(t) = {}", self.coeffs[0])?;
        for (power, &coeff) in self.coeffs.iter().enumerate().skip(1) {
            let sign = if coeff < 0.0 { '-' } else { '+' };
            match power {
                1 => write!(f, " {} {}t", sign, coeff.abs())?,
                _ => write!(f, " {} {}t^{}", sign, coeff.abs(), power)?,
            }
        }
        Ok(())
    }
}
