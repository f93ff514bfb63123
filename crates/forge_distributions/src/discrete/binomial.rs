//! Binomial distribution.

use super::{require_probability, require_table_span};
use crate::error::DistributionError;
use crate::table::ProbabilityTable;
use crate::traits::Discrete;
use forge_core::math::special::ln_choose;

/// Number of successes in `n` independent trials of probability `p`.
///
/// The full pmf over `0..=n` is tabulated at construction, so `n` is
/// limited to fewer than [`MAX_TABLE_LEN`](crate::table::MAX_TABLE_LEN)
/// trials.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
    table: ProbabilityTable,
}

impl Binomial {
    /// Constructs `B(n, p)`.
    ///
    /// # Errors
    /// `DistributionError::InvalidParameter` unless `0 <= p <= 1` and the
    /// `n + 1` outcomes fit in a table.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        let p = require_probability("p", p)?;
        require_table_span("n", n)?;
        let weights = (0..=n)
            .map(|k| {
                if p == 0.0 {
                    if k == 0 { 1.0 } else { 0.0 }
                } else if p == 1.0 {
                    if k == n { 1.0 } else { 0.0 }
                } else {
                    let ln = ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (-p).ln_1p();
                    ln.exp()
                }
            })
            .collect();
        let table = ProbabilityTable::from_contiguous(0, weights)?;
        Ok(Self { n, p, table })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Table lookup for a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> i64 {
        self.table.sample(r)
    }
}

impl Discrete for Binomial {
    fn pmf(&self, k: i64) -> f64 {
        self.table.pmf(k)
    }

    fn cdf(&self, k: i64) -> f64 {
        self.table.cdf(k)
    }

    fn expectation(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmf_small_case() {
        let b = Binomial::new(4, 0.5).unwrap();
        let expected = [1.0, 4.0, 6.0, 4.0, 1.0];
        for (k, e) in expected.iter().enumerate() {
            assert_relative_eq!(b.pmf(k as i64), e / 16.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_p() {
        let zero = Binomial::new(5, 0.0).unwrap();
        assert_eq!(zero.pmf(0), 1.0);
        assert_eq!(zero.next(0.99), 0);
        let one = Binomial::new(5, 1.0).unwrap();
        assert_eq!(one.pmf(5), 1.0);
        assert_eq!(one.next(0.0), 5);
    }

    #[test]
    fn test_rejects_untabulable_trials() {
        assert!(matches!(
            Binomial::new(10_000_000_000, 0.5),
            Err(DistributionError::InvalidParameter { name: "n", .. })
        ));
        assert!(Binomial::new(u64::MAX, 0.5).is_err());
    }

    #[test]
    fn test_support_bounds_with_degenerate_p() {
        let b = Binomial::new(12, 0.0).unwrap();
        assert_eq!(b.min_value(), 0);
        assert_eq!(b.max_value(), 12);
    }

    #[test]
    fn test_zero_trials() {
        let b = Binomial::new(0, 0.4).unwrap();
        assert_eq!(b.pmf(0), 1.0);
        assert_eq!(b.next(0.7), 0);
    }
}
