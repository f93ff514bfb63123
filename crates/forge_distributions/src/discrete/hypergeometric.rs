//! Hypergeometric distribution.

use crate::error::DistributionError;
use super::require_table_span;
use crate::table::ProbabilityTable;
use crate::traits::Discrete;
use forge_core::math::special::ln_choose;

/// Successes among `n` draws without replacement from a population of
/// `total` containing `successes` marked items.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypergeometric {
    total: u64,
    successes: u64,
    draws: u64,
    table: ProbabilityTable,
}

impl Hypergeometric {
    /// Constructs with population `total` (N), marked items `successes`
    /// (K) and sample size `draws` (n).
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `total >= 1` and both
    /// `successes` and `draws` are at most `total`, and the support fits in
    /// a table.
    pub fn new(total: u64, successes: u64, draws: u64) -> Result<Self, DistributionError> {
        if total == 0 {
            return Err(DistributionError::InvalidParameter {
                name: "total",
                value: 0.0,
                constraint: "must be at least 1",
            });
        }
        if successes > total {
            return Err(DistributionError::InvalidParameter {
                name: "successes",
                value: successes as f64,
                constraint: "must not exceed total",
            });
        }
        if draws > total {
            return Err(DistributionError::InvalidParameter {
                name: "draws",
                value: draws as f64,
                constraint: "must not exceed total",
            });
        }

        let low = (draws + successes).saturating_sub(total);
        let high = draws.min(successes);
        require_table_span("draws", high - low)?;
        let ln_norm = ln_choose(total, draws);
        let weights = (low..=high)
            .map(|k| {
                (ln_choose(successes, k) + ln_choose(total - successes, draws - k) - ln_norm).exp()
            })
            .collect();
        let table = ProbabilityTable::from_contiguous(low as i64, weights)?;
        Ok(Self {
            total,
            successes,
            draws,
            table,
        })
    }

    /// Population size N.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Marked items K.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Sample size n.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Table lookup for a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> i64 {
        self.table.sample(r)
    }
}

impl Discrete for Hypergeometric {
    fn pmf(&self, k: i64) -> f64 {
        self.table.pmf(k)
    }

    fn cdf(&self, k: i64) -> f64 {
        self.table.cdf(k)
    }

    fn expectation(&self) -> f64 {
        self.draws as f64 * self.successes as f64 / self.total as f64
    }

    fn variance(&self) -> f64 {
        if self.total <= 1 {
            return 0.0;
        }
        let (big_n, big_k, n) = (self.total as f64, self.successes as f64, self.draws as f64);
        n * big_k * (big_n - big_k) * (big_n - n) / (big_n * big_n * (big_n - 1.0))
    }

    fn min_value(&self) -> i64 {
        self.table.min_value()
    }

    fn max_value(&self) -> i64 {
        self.table.max_value()
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        self.next(unit())
    }
}
