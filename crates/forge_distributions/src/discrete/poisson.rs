//! Poisson distribution.

use crate::error::{require_positive, DistributionError};
use crate::traits::Discrete;
use forge_core::math::special::ln_gamma;
use std::f64::consts::PI;

/// Mean above which the Lorentzian-envelope rejection sampler is used.
const REJECTION_THRESHOLD: f64 = 12.0;

/// Poisson with rate `lambda`.
///
/// Sampling uses rejection from a Lorentzian envelope for
/// `lambda >= 12` and the product-of-uniforms method below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
    ln_lambda: f64,
    // sqrt(2λ), the envelope width
    sq: f64,
    // λ ln λ − ln Γ(λ + 1), the log-density at the mode
    g: f64,
}

impl Poisson {
    /// Constructs with rate `lambda`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `lambda` is positive and
    /// finite.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        let lambda = require_positive("lambda", lambda)?;
        let ln_lambda = lambda.ln();
        Ok(Self {
            lambda,
            ln_lambda,
            sq: (2.0 * lambda).sqrt(),
            g: lambda * ln_lambda - ln_gamma(lambda + 1.0),
        })
    }

    /// Rate.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    fn ln_pmf(&self, k: f64) -> f64 {
        k * self.ln_lambda - self.lambda - ln_gamma(k + 1.0)
    }

    fn sample_small(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        let threshold = (-self.lambda).exp();
        let mut k = -1;
        let mut t = 1.0;
        loop {
            k += 1;
            t *= 1.0 - unit();
            if t <= threshold {
                return k;
            }
        }
    }

    fn sample_rejection(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        loop {
            let (y, em) = loop {
                let y = (PI * unit()).tan();
                let em = self.sq * y + self.lambda;
                if em >= 0.0 {
                    break (y, em.floor());
                }
            };
            let t = 0.9 * (1.0 + y * y) * (em * self.ln_lambda - ln_gamma(em + 1.0) - self.g).exp();
            if unit() <= t {
                return em as i64;
            }
        }
    }
}

impl Discrete for Poisson {
    fn pmf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        self.ln_pmf(k as f64).exp()
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        // Terms are summed outward from k in the direction they shrink, so
        // neither e^-λ underflowing nor a huge k stalls the loop.
        if (k as f64) < self.lambda.floor() {
            let mut term = self.ln_pmf(k as f64).exp();
            let mut sum = term;
            let mut i = k;
            while i > 0 && term > sum * f64::EPSILON {
                term *= i as f64 / self.lambda;
                sum += term;
                i -= 1;
            }
            sum.min(1.0)
        } else {
            let mut i = k as f64 + 1.0;
            let mut term = self.ln_pmf(i).exp();
            let mut tail = term;
            while term > tail * f64::EPSILON {
                i += 1.0;
                term *= self.lambda / i;
                tail += term;
            }
            (1.0 - tail).max(0.0)
        }
    }

    fn expectation(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }

    fn min_value(&self) -> i64 {
        0
    }

    fn max_value(&self) -> i64 {
        i64::MAX
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        if self.lambda < REJECTION_THRESHOLD {
            self.sample_small(unit)
        } else {
            self.sample_rejection(unit)
        }
    }
}
