//! Negative hypergeometric distribution.

use crate::error::DistributionError;
use super::require_table_span;
use crate::table::ProbabilityTable;
use crate::traits::Discrete;
use forge_core::math::special::ln_choose;

/// Successes drawn without replacement before the `r`-th failure, from a
/// population of `total` items of which `successes` are successes.
#[derive(Debug, Clone, PartialEq)]
pub struct NegHypergeometric {
    total: u64,
    successes: u64,
    failures: u64,
    table: ProbabilityTable,
}

impl NegHypergeometric {
    /// Constructs with population `total` (N), successes `successes` (K)
    /// and stopping failure count `failures` (r).
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `successes <= total`
    /// and `1 <= failures <= total - successes`, and the `successes + 1`
    /// outcomes fit in a table.
    pub fn new(total: u64, successes: u64, failures: u64) -> Result<Self, DistributionError> {
        if successes > total {
            return Err(DistributionError::InvalidParameter {
                name: "successes",
                value: successes as f64,
                constraint: "must not exceed total",
            });
        }
        if failures == 0 || failures > total - successes {
            return Err(DistributionError::InvalidParameter {
                name: "failures",
                value: failures as f64,
                constraint: "must lie in [1, total - successes]",
            });
        }

        require_table_span("successes", successes)?;

        let ln_norm = ln_choose(total, successes);
        let weights = (0..=successes)
            .map(|k| {
                (ln_choose(k + failures - 1, k) + ln_choose(total - failures - k, successes - k)
                    - ln_norm)
                    .exp()
            })
            .collect();
        let table = ProbabilityTable::from_contiguous(0, weights)?;
        Ok(Self {
            total,
            successes,
            failures,
            table,
        })
    }

    /// Population size N.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Successes K.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Stopping failure count r.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Table lookup for a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> i64 {
        self.table.sample(r)
    }
}

impl Discrete for NegHypergeometric {
    fn pmf(&self, k: i64) -> f64 {
        self.table.pmf(k)
    }

    fn cdf(&self, k: i64) -> f64 {
        self.table.cdf(k)
    }

    fn expectation(&self) -> f64 {
        let fails = (self.total - self.successes) as f64;
        self.failures as f64 * self.successes as f64 / (fails + 1.0)
    }

    fn variance(&self) -> f64 {
        let (big_n, big_k, r) = (
            self.total as f64,
            self.successes as f64,
            self.failures as f64,
        );
        let fails = big_n - big_k;
        r * big_k * (big_n + 1.0) * (fails - r + 1.0) / ((fails + 1.0).powi(2) * (fails + 2.0))
    }

    fn min_value(&self) -> i64 {
        0
    }

    fn max_value(&self) -> i64 {
        self.table.max_value()
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        self.next(unit())
    }
}
