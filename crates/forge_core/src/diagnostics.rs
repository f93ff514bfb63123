//! Statistical diagnostics over generator output.
//!
//! Lightweight checks for generator quality, suitable for smoke tests and
//! the `forge stats` command. They are not a substitute for a full external
//! battery.

use crate::rng::Random;
use crate::traits::Generator;
use crate::types::{RandomError, Word};

/// Largest histogram `mod_frequency` and `bin_frequency` will allocate.
pub const MAX_HISTOGRAM_BINS: usize = 1 << 24;

/// Histogram length for `buckets`, bounded by [`MAX_HISTOGRAM_BINS`].
fn histogram_len(buckets: u64) -> Result<usize, RandomError> {
    match usize::try_from(buckets) {
        Ok(len) if (1..=MAX_HISTOGRAM_BINS).contains(&len) => Ok(len),
        _ => Err(RandomError::InvalidRange {
            min: 0.0,
            max: buckets as f64,
        }),
    }
}

/// Moments and extremes of `next_unit` draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStatistics {
    /// Number of draws.
    pub count: usize,
    /// Sample mean (expected 1/2).
    pub mean: f64,
    /// Population variance (expected 1/12).
    pub variance: f64,
    /// Smallest draw.
    pub min: f64,
    /// Largest draw.
    pub max: f64,
}

/// Mean, variance and extremes of `count` unit draws.
///
/// Uses Welford's running update. `count == 0` yields NaN moments.
pub fn unit_statistics<G: Generator>(rng: &mut Random<G>, count: usize) -> UnitStatistics {
    let mut mean = 0.0;
    let mut m2 = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..count {
        let u = rng.next_unit();
        let delta = u - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (u - mean);
        min = min.min(u);
        max = max.max(u);
    }
    let (mean, variance) = if count == 0 {
        (f64::NAN, f64::NAN)
    } else {
        (mean, m2 / count as f64)
    };
    UnitStatistics {
        count,
        mean,
        variance,
        min,
        max,
    }
}

/// Counts of raw words reduced modulo `modulus`.
///
/// # Errors
/// `RandomError::InvalidRange` when `modulus` is zero or above
/// [`MAX_HISTOGRAM_BINS`].
pub fn mod_frequency<G: Generator>(
    rng: &mut Random<G>,
    count: usize,
    modulus: u64,
) -> Result<Vec<u64>, RandomError> {
    let mut counts = vec![0u64; histogram_len(modulus)?];
    for _ in 0..count {
        counts[(rng.next().as_u64() % modulus) as usize] += 1;
    }
    Ok(counts)
}

/// Histogram of unit draws over `bins` equal-width bins.
///
/// # Errors
/// `RandomError::InvalidRange` when `bins` is zero or above
/// [`MAX_HISTOGRAM_BINS`].
pub fn bin_frequency<G: Generator>(
    rng: &mut Random<G>,
    count: usize,
    bins: usize,
) -> Result<Vec<u64>, RandomError> {
    let mut counts = vec![0u64; histogram_len(bins as u64)?];
    for _ in 0..count {
        let bin = ((rng.next_unit() * bins as f64) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    Ok(counts)
}

/// Pearson chi-square statistic of `observed` against a uniform expectation.
///
/// Returns NaN for an empty or all-zero histogram.
pub fn chi_square(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return f64::NAN;
    }
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// `count` consecutive pairs of unit draws, for scatter-plot inspection of
/// serial correlation.
pub fn scatter<G: Generator>(rng: &mut Random<G>, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|_| {
            let x = rng.next_unit();
            (x, rng.next_unit())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MersenneTwister32, XorShift64};
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_statistics_uniform() {
        let mut rng = Random::<MersenneTwister32>::seeded(5489);
        let stats = unit_statistics(&mut rng, 100_000);
        assert!((0.49..=0.51).contains(&stats.mean));
        assert!((stats.variance - 1.0 / 12.0).abs() < 0.01);
        assert!(stats.min >= 0.0 && stats.max < 1.0);
    }

    #[test]
    fn test_unit_statistics_empty() {
        let mut rng = Random::<XorShift64>::seeded(1);
        assert!(unit_statistics(&mut rng, 0).mean.is_nan());
    }

    #[test]
    fn test_mod_frequency_totals() {
        let mut rng = Random::<XorShift64>::seeded(3);
        let counts = mod_frequency(&mut rng, 10_000, 7).unwrap();
        assert_eq!(counts.len(), 7);
        assert_eq!(counts.iter().sum::<u64>(), 10_000);
        assert!(mod_frequency(&mut rng, 10, 0).is_err());
    }

    #[test]
    fn test_oversized_histograms_rejected() {
        let mut rng = Random::<XorShift64>::seeded(3);
        assert!(matches!(
            mod_frequency(&mut rng, 10, u64::MAX),
            Err(RandomError::InvalidRange { .. })
        ));
        assert!(mod_frequency(&mut rng, 10, MAX_HISTOGRAM_BINS as u64 + 1).is_err());
        assert!(bin_frequency(&mut rng, 10, MAX_HISTOGRAM_BINS + 1).is_err());
        assert!(bin_frequency(&mut rng, 10, 0).is_err());
        assert_eq!(mod_frequency(&mut rng, 10, 1).unwrap(), vec![10]);
    }

    #[test]
    fn test_chi_square() {
        assert_eq!(chi_square(&[10, 10, 10, 10]), 0.0);
        assert_relative_eq!(chi_square(&[20, 0]), 20.0);
        assert!(chi_square(&[]).is_nan());
    }

    #[test]
    fn test_bin_frequency_chi_square_reasonable() {
        let mut rng = Random::<MersenneTwister32>::seeded(42);
        let counts = bin_frequency(&mut rng, 100_000, 10).unwrap();
        // 9 degrees of freedom: the 99.9th percentile is 27.9.
        assert!(chi_square(&counts) < 27.9);
    }

    #[test]
    fn test_scatter_len() {
        let mut rng = Random::<XorShift64>::seeded(3);
        let points = scatter(&mut rng, 50);
        assert_eq!(points.len(), 50);
        assert!(points.iter().all(|&(x, y)| x < 1.0 && y < 1.0));
    }
}
