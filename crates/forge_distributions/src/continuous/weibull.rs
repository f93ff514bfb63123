//! Weibull distribution.

use crate::error::{require_positive, DistributionError};
use crate::traits::Continuous;

/// Weibull with scale `lambda` and shape `k`.
///
/// Moments are reported as NaN; only the density, CDF and sampler are
/// provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    lambda: f64,
    k: f64,
}

impl Weibull {
    /// Constructs with scale `lambda` and shape `k`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless both are positive and
    /// finite.
    pub fn new(lambda: f64, k: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            lambda: require_positive("lambda", lambda)?,
            k: require_positive("k", k)?,
        })
    }

    /// Scale.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Shape.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Inverse CDF of a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> f64 {
        self.lambda * (-(1.0 - r).ln()).powf(1.0 / self.k)
    }
}

impl Continuous for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.lambda;
        (self.k / self.lambda) * z.powf(self.k - 1.0) * (-z.powf(self.k)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        -(-(x / self.lambda).powf(self.k)).exp_m1()
    }

    fn expectation(&self) -> f64 {
        f64::NAN
    }

    fn variance(&self) -> f64 {
        f64::NAN
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        self.next(unit())
    }
}
