//! Maxwell-Boltzmann speed distribution.

use crate::error::{require_positive, DistributionError};
use crate::traits::Continuous;
use forge_core::math::special::erf;
use std::f64::consts::{FRAC_2_PI, PI, SQRT_2, TAU};

/// Maxwell distribution with scale `a`: the norm of a 3-vector of
/// independent `N(0, a²)` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maxwell {
    a: f64,
}

impl Maxwell {
    /// Constructs with scale `a`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `a` is positive and finite.
    pub fn new(a: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            a: require_positive("a", a)?,
        })
    }

    /// Scale.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Magnitude of three Box-Muller normals from three uniform draws.
    ///
    /// One Box-Muller pair contributes `-2 ln r1` to the squared norm
    /// regardless of angle; the third component is drawn from its own
    /// radius `r2` and angle `r3`.
    pub fn next(&self, r1: f64, r2: f64, r3: f64) -> f64 {
        let pair = -2.0 * (1.0 - r1).ln();
        let third = -2.0 * (1.0 - r2).ln() * (TAU * r3).cos().powi(2);
        self.a * (pair + third).sqrt()
    }
}

impl Continuous for Maxwell {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let a2 = self.a * self.a;
        FRAC_2_PI.sqrt() * x * x * (-x * x / (2.0 * a2)).exp() / (a2 * self.a)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = x / self.a;
        let value = erf(z / SQRT_2) - FRAC_2_PI.sqrt() * z * (-0.5 * z * z).exp();
        value.clamp(0.0, 1.0)
    }

    fn expectation(&self) -> f64 {
        2.0 * self.a * FRAC_2_PI.sqrt()
    }

    fn variance(&self) -> f64 {
        self.a * self.a * (3.0 * PI - 8.0) / PI
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        let r1 = unit();
        let r2 = unit();
        let r3 = unit();
        self.next(r1, r2, r3)
    }
}
