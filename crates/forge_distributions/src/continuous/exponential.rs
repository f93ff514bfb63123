//! Shifted exponential distribution.

use crate::error::{require_finite, require_positive, DistributionError};
use crate::traits::Continuous;

/// Exponential with rate `k`, shifted to start at `x0`.
///
/// pdf(x) = k·e^(−k(x − x0)) for x ≥ x0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    k: f64,
    x0: f64,
}

impl Exponential {
    /// Constructs with rate `k` and location `x0`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `k` is positive and
    /// finite and `x0` finite.
    pub fn new(k: f64, x0: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            k: require_positive("k", k)?,
            x0: require_finite("x0", x0)?,
        })
    }

    /// Rate.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Location.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Inverse CDF of a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> f64 {
        self.x0 - (1.0 - r).ln() / self.k
    }
}

impl Continuous for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.x0 {
            0.0
        } else {
            self.k * (-self.k * (x - self.x0)).exp()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.x0 {
            0.0
        } else {
            -(-self.k * (x - self.x0)).exp_m1()
        }
    }

    fn expectation(&self) -> f64 {
        self.x0 + 1.0 / self.k
    }

    fn variance(&self) -> f64 {
        1.0 / (self.k * self.k)
    }

    fn min_value(&self) -> f64 {
        self.x0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        self.next(unit())
    }
}
