//! Cauchy (Lorentz) distribution.

use crate::error::{require_finite, require_positive, DistributionError};
use crate::traits::Continuous;
use std::f64::consts::{FRAC_1_PI, PI};

/// Cauchy with location `x0` and scale `gamma`.
///
/// Mean and variance are undefined and reported as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    x0: f64,
    gamma: f64,
}

impl Cauchy {
    /// Constructs with location `x0` and scale `gamma`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `x0` is finite and
    /// `gamma` positive and finite.
    pub fn new(x0: f64, gamma: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            x0: require_finite("x0", x0)?,
            gamma: require_positive("gamma", gamma)?,
        })
    }

    /// Location.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Scale.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Inverse CDF of a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> f64 {
        self.x0 + self.gamma * (PI * (r - 0.5)).tan()
    }
}

impl Continuous for Cauchy {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.x0) / self.gamma;
        FRAC_1_PI / (self.gamma * (1.0 + z * z))
    }

    fn cdf(&self, x: f64) -> f64 {
        FRAC_1_PI * ((x - self.x0) / self.gamma).atan() + 0.5
    }

    fn expectation(&self) -> f64 {
        f64::NAN
    }

    fn variance(&self) -> f64 {
        f64::NAN
    }

    fn min_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        self.next(unit())
    }
}
