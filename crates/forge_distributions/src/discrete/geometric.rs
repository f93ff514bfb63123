//! Geometric distribution (trials up to the first success).

use crate::error::DistributionError;
use crate::traits::Discrete;

/// Number of Bernoulli(`p`) trials up to and including the first success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
    ln_q: f64,
}

impl Geometric {
    /// Constructs with success probability `p`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        if p.is_nan() || p <= 0.0 || p > 1.0 {
            return Err(DistributionError::InvalidParameter {
                name: "p",
                value: p,
                constraint: "must lie in (0, 1]",
            });
        }
        Ok(Self {
            p,
            ln_q: (-p).ln_1p(),
        })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Inverse CDF: the smallest `k >= 1` with `cdf(k) > r`.
    pub fn next(&self, r: f64) -> i64 {
        if self.p == 1.0 {
            return 1;
        }
        let k = ((-r).ln_1p() / self.ln_q).floor() + 1.0;
        // Saturating float-to-int cast keeps extreme draws in range.
        (k as i64).max(1)
    }
}

impl Discrete for Geometric {
    fn pmf(&self, k: i64) -> f64 {
        if k < 1 {
            return 0.0;
        }
        self.p * ((k - 1) as f64 * self.ln_q).exp()
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 1 {
            return 0.0;
        }
        -(k as f64 * self.ln_q).exp_m1()
    }

    fn expectation(&self) -> f64 {
        1.0 / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    fn min_value(&self) -> i64 {
        1
    }

    fn max_value(&self) -> i64 {
        i64::MAX
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        self.next(unit())
    }
}
