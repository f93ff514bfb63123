//! Sorted outcome table with cumulative probabilities.
//!
//! Discrete distributions without a closed-form inverse precompute their
//! probabilities once into a [`ProbabilityTable`] and sample by searching
//! the cumulative array for the first entry exceeding a uniform draw.

use crate::error::DistributionError;

/// Largest number of outcomes a table distribution will tabulate.
pub const MAX_TABLE_LEN: usize = 1 << 22;

/// Owned struct-of-arrays `(outcome, pmf, cdf)` table.
///
/// Outcomes are unique and ascending; the cumulative array is
/// non-decreasing and its last element is exactly 1.
///
/// # Examples
/// ```
/// use forge_distributions::ProbabilityTable;
///
/// let table = ProbabilityTable::from_weights(vec![3, 1, 2], vec![1.0, 1.0, 2.0]).unwrap();
/// assert_eq!(table.outcomes(), &[1, 2, 3]);
/// assert_eq!(table.pmf(2), 0.5);
/// assert_eq!(table.sample(0.3), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    outcomes: Vec<i64>,
    pmf: Vec<f64>,
    cdf: Vec<f64>,
}

impl ProbabilityTable {
    /// Builds from unnormalised non-negative weights.
    ///
    /// Pairs are sorted by outcome before the cumulative sum is formed.
    ///
    /// # Errors
    /// `DistributionError::InvalidSupport` for empty input, mismatched
    /// lengths, duplicate outcomes, or weights that are negative,
    /// non-finite or all zero.
    pub fn from_weights(outcomes: Vec<i64>, weights: Vec<f64>) -> Result<Self, DistributionError> {
        if outcomes.len() != weights.len() {
            return Err(DistributionError::InvalidSupport(format!(
                "{} outcomes but {} weights",
                outcomes.len(),
                weights.len()
            )));
        }
        if outcomes.is_empty() {
            return Err(DistributionError::InvalidSupport(
                "support must contain at least one outcome".to_string(),
            ));
        }

        let mut pairs: Vec<(i64, f64)> = outcomes.into_iter().zip(weights).collect();
        pairs.sort_by_key(|&(x, _)| x);
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(DistributionError::InvalidSupport(format!(
                "duplicate outcome {}",
                w[0].0
            )));
        }
        let (outcomes, weights): (Vec<i64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::build(outcomes, weights)
    }

    /// Builds over the contiguous outcomes `start, start + 1, ...`.
    ///
    /// # Errors
    /// As for [`ProbabilityTable::from_weights`], and also when the last
    /// outcome would overflow `i64`.
    pub fn from_contiguous(start: i64, weights: Vec<f64>) -> Result<Self, DistributionError> {
        if weights.is_empty() {
            return Err(DistributionError::InvalidSupport(
                "support must contain at least one outcome".to_string(),
            ));
        }
        let fits = i64::try_from(weights.len() - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .is_some();
        if !fits {
            return Err(DistributionError::InvalidSupport(format!(
                "{} outcomes starting at {} overflow i64",
                weights.len(),
                start
            )));
        }
        let outcomes = (0..weights.len() as i64).map(|i| start + i).collect();
        Self::build(outcomes, weights)
    }

    fn build(outcomes: Vec<i64>, weights: Vec<f64>) -> Result<Self, DistributionError> {
        let mut total = 0.0;
        for (x, &w) in outcomes.iter().zip(&weights) {
            if !w.is_finite() || w < 0.0 {
                return Err(DistributionError::InvalidSupport(format!(
                    "weight {} for outcome {} is not a finite non-negative number",
                    w, x
                )));
            }
            total += w;
        }
        if total <= 0.0 || !total.is_finite() {
            return Err(DistributionError::InvalidSupport(format!(
                "total weight {} must be positive and finite",
                total
            )));
        }

        let pmf: Vec<f64> = weights.iter().map(|w| w / total).collect();
        let mut cdf = Vec::with_capacity(pmf.len());
        let mut running = 0.0;
        for &p in &pmf {
            running += p;
            cdf.push(running.min(1.0));
        }
        // Saturate from the last outcome carrying weight, so a running sum
        // that rounds below 1 cannot hand the remainder to trailing zeros.
        if let Some(last) = weights.iter().rposition(|&w| w > 0.0) {
            cdf[last..].fill(1.0);
        }
        Ok(Self { outcomes, pmf, cdf })
    }

    /// Sorted outcomes.
    pub fn outcomes(&self) -> &[i64] {
        &self.outcomes
    }

    /// Normalised probabilities, aligned with [`outcomes`](Self::outcomes).
    pub fn probabilities(&self) -> &[f64] {
        &self.pmf
    }

    /// Cumulative probabilities, aligned with [`outcomes`](Self::outcomes).
    pub fn cumulative(&self) -> &[f64] {
        &self.cdf
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false; a table holds at least one outcome.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Probability of `k`, 0 when `k` is not an outcome.
    pub fn pmf(&self, k: i64) -> f64 {
        self.outcomes
            .binary_search(&k)
            .map(|i| self.pmf[i])
            .unwrap_or(0.0)
    }

    /// `P(X <= k)`.
    pub fn cdf(&self, k: i64) -> f64 {
        match self.outcomes.partition_point(|&x| x <= k) {
            0 => 0.0,
            i => self.cdf[i - 1],
        }
    }

    /// Outcome for uniform draw `r`: the first whose cumulative probability
    /// exceeds `r`.
    pub fn sample(&self, r: f64) -> i64 {
        let i = self.cdf.partition_point(|&c| c <= r);
        self.outcomes[i.min(self.outcomes.len() - 1)]
    }

    /// Smallest outcome.
    pub fn min_value(&self) -> i64 {
        self.outcomes[0]
    }

    /// Largest outcome.
    pub fn max_value(&self) -> i64 {
        self.outcomes[self.outcomes.len() - 1]
    }

    /// Mean of the tabulated distribution.
    pub fn expectation(&self) -> f64 {
        self.outcomes
            .iter()
            .zip(&self.pmf)
            .map(|(&x, &p)| x as f64 * p)
            .sum()
    }

    /// Variance of the tabulated distribution.
    pub fn variance(&self) -> f64 {
        let mean = self.expectation();
        self.outcomes
            .iter()
            .zip(&self.pmf)
            .map(|(&x, &p)| {
                let d = x as f64 - mean;
                p * d * d
            })
            .sum()
    }
}
