//! Capability traits for continuous and discrete distributions.
//!
//! Each trait separates the side-effect-free queries (density, CDF, moments,
//! support) from sampling. Sampling is expressed through `sample_with`, which
//! pulls uniform `[0, 1)` draws from a caller-supplied source, so the traits
//! stay object-safe. `sample` is the convenience form taking a
//! [`Random`] directly.

use crate::error::DistributionError;
use forge_core::rng::Random;
use forge_core::traits::Generator;

/// A distribution over the reals.
pub trait Continuous {
    /// Probability density at `x`.
    ///
    /// Returns 0 outside an unbounded-side support; finite-support
    /// distributions return NaN outside `[min_value, max_value]`.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Density, failing outside the support instead of returning NaN.
    ///
    /// # Errors
    /// `DistributionError::OutOfDomain` for finite-support distributions
    /// queried outside `[min_value, max_value]`.
    fn try_pdf(&self, x: f64) -> Result<f64, DistributionError> {
        Ok(self.pdf(x))
    }

    /// CDF, failing outside the support instead of returning NaN.
    ///
    /// # Errors
    /// As for [`Continuous::try_pdf`].
    fn try_cdf(&self, x: f64) -> Result<f64, DistributionError> {
        Ok(self.cdf(x))
    }

    /// Mean, or NaN when undefined.
    fn expectation(&self) -> f64;

    /// Variance, or NaN when undefined.
    fn variance(&self) -> f64;

    /// Lower end of the support (`-∞` when unbounded).
    fn min_value(&self) -> f64;

    /// Upper end of the support (`+∞` when unbounded).
    fn max_value(&self) -> f64;

    /// Draws one sample, pulling uniform `[0, 1)` values from `unit`.
    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64;

    /// Draws one sample from `rng`.
    fn sample<G: Generator>(&self, rng: &mut Random<G>) -> f64
    where
        Self: Sized,
    {
        self.sample_with(&mut || rng.next_unit())
    }
}

/// A distribution over the integers.
pub trait Discrete {
    /// Probability mass at `k`; 0 outside the support.
    fn pmf(&self, k: i64) -> f64;

    /// Cumulative probability `P(X <= k)`.
    fn cdf(&self, k: i64) -> f64;

    /// Mean.
    fn expectation(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// Smallest outcome.
    fn min_value(&self) -> i64;

    /// Largest outcome (`i64::MAX` when unbounded).
    fn max_value(&self) -> i64;

    /// Draws one sample, pulling uniform `[0, 1)` values from `unit`.
    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64;

    /// Draws one sample from `rng`.
    fn sample<G: Generator>(&self, rng: &mut Random<G>) -> i64
    where
        Self: Sized,
    {
        self.sample_with(&mut || rng.next_unit())
    }
}
