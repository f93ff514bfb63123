//! Bernoulli trial.

use super::require_probability;
use crate::error::DistributionError;
use crate::traits::Discrete;

/// Single trial succeeding (1) with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
    q: f64,
}

impl Bernoulli {
    /// Constructs with success probability `p`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `0 <= p <= 1`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        let p = require_probability("p", p)?;
        Ok(Self { p, q: 1.0 - p })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// 1 when `r < p`, else 0.
    pub fn next(&self, r: f64) -> i64 {
        i64::from(r < self.p)
    }
}

impl Discrete for Bernoulli {
    fn pmf(&self, k: i64) -> f64 {
        match k {
            0 => self.q,
            1 => self.p,
            _ => 0.0,
        }
    }

    fn cdf(&self, k: i64) -> f64 {
        match k {
            k if k < 0 => 0.0,
            0 => self.q,
            _ => 1.0,
        }
    }

    fn expectation(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * self.q
    }

    fn min_value(&self) -> i64 {
        0
    }

    fn max_value(&self) -> i64 {
        1
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        self.next(unit())
    }
}
