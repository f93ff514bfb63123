//! Normal distribution.

use crate::error::{require_finite, require_positive, DistributionError};
use crate::traits::Continuous;
use forge_core::math::special::norm_cdf;
use std::f64::consts::{PI, TAU};

/// Gaussian with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mu: f64,
    sigma: f64,
}

impl Gaussian {
    /// Constructs `N(mu, sigma²)`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `mu` is finite and
    /// `sigma` positive and finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            mu: require_finite("mu", mu)?,
            sigma: require_positive("sigma", sigma)?,
        })
    }

    /// Mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Box-Muller transform of two uniform `[0, 1)` draws.
    ///
    /// `r1` enters as `1 - r1` so a zero draw never reaches `ln 0`.
    pub fn next(&self, r1: f64, r2: f64) -> f64 {
        let radius = (-2.0 * (1.0 - r1).ln()).sqrt();
        self.mu + self.sigma * radius * (TAU * r2).cos()
    }
}

impl Continuous for Gaussian {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / ((2.0 * PI).sqrt() * self.sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        norm_cdf((x - self.mu) / self.sigma)
    }

    fn expectation(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn min_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        let r1 = unit();
        let r2 = unit();
        self.next(r1, r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_sigma() {
        assert!(Gaussian::new(0.0, 0.0).is_err());
        assert!(Gaussian::new(0.0, -1.0).is_err());
        assert!(Gaussian::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_pdf_peak() {
        let g = Gaussian::new(1.0, 2.0).unwrap();
        assert_relative_eq!(g.pdf(1.0), 0.398_942_280_401_432_7 / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_at_mean_and_tails() {
        let g = Gaussian::new(-3.0, 0.5).unwrap();
        assert_relative_eq!(g.cdf(-3.0), 0.5, epsilon = 1e-9);
        assert!(g.cdf(-20.0) < 1e-12);
        assert_relative_eq!(g.cdf(20.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_next_zero_draw_is_finite() {
        let g = Gaussian::new(0.0, 1.0).unwrap();
        assert_eq!(g.next(0.0, 0.0), 0.0);
        assert!(g.next(0.999_999_999, 0.0).is_finite());
    }
}
