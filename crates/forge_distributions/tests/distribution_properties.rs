//! Integration tests for distribution sampling, CDF shape and normalisation.
//!
//! Samples are drawn through the public `sample` API from fixed-seed
//! generators, so every statistical assertion here is reproducible.

use approx::assert_relative_eq;
use forge_core::generators::{MersenneTwister64, XorShift64};
use forge_core::rng::Random;
use forge_distributions::continuous::{
    Cauchy, CustomDistribution, Exponential, Gaussian, Maxwell, Weibull,
};
use forge_distributions::discrete::{
    Bernoulli, Binomial, Geometric, Gibbs, Hypergeometric, NegHypergeometric, Poisson,
};
use forge_distributions::{Continuous, Discrete, ProbabilityTable};
use proptest::prelude::*;

/// Sample mean and population variance of `n` draws.
fn moments(samples: impl Iterator<Item = f64>) -> (f64, f64) {
    let values: Vec<f64> = samples.collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, var)
}

// ===== Moment recovery =====

#[test]
fn test_gaussian_moments_one_million_draws() {
    let g = Gaussian::new(5.0, 2.0).unwrap();
    let mut rng = Random::<MersenneTwister64>::seeded(20240601);
    let (mean, var) = moments((0..1_000_000).map(|_| g.sample(&mut rng)));
    assert_relative_eq!(mean, g.expectation(), max_relative = 0.01);
    assert_relative_eq!(var, g.variance(), max_relative = 0.01);
}

#[test]
fn test_continuous_sample_moments() {
    let mut rng = Random::<MersenneTwister64>::seeded(7);
    let n = 200_000;

    let e = Exponential::new(0.5, 1.0).unwrap();
    let (mean, var) = moments((0..n).map(|_| e.sample(&mut rng)));
    assert_relative_eq!(mean, e.expectation(), max_relative = 0.02);
    assert_relative_eq!(var, e.variance(), max_relative = 0.03);

    let m = Maxwell::new(1.5).unwrap();
    let (mean, var) = moments((0..n).map(|_| m.sample(&mut rng)));
    assert_relative_eq!(mean, m.expectation(), max_relative = 0.01);
    assert_relative_eq!(var, m.variance(), max_relative = 0.03);
}

#[test]
fn test_cauchy_sample_median() {
    let c = Cauchy::new(3.0, 0.5).unwrap();
    let mut rng = Random::<XorShift64>::seeded(99);
    let mut samples: Vec<f64> = (0..100_001).map(|_| c.sample(&mut rng)).collect();
    samples.sort_by(|a, b| a.total_cmp(b));
    assert!((samples[50_000] - 3.0).abs() < 0.02);
}

#[test]
fn test_discrete_sample_moments() {
    let mut rng = Random::<MersenneTwister64>::seeded(11);
    let n = 200_000;

    let dists: Vec<Box<dyn Discrete>> = vec![
        Box::new(Poisson::new(4.0).unwrap()),
        Box::new(Poisson::new(20.0).unwrap()),
        Box::new(Binomial::new(20, 0.3).unwrap()),
        Box::new(Geometric::new(0.2).unwrap()),
        Box::new(Hypergeometric::new(50, 20, 10).unwrap()),
        Box::new(NegHypergeometric::new(40, 15, 5).unwrap()),
        Box::new(Bernoulli::new(0.35).unwrap()),
    ];
    for d in &dists {
        let (mean, var) = moments((0..n).map(|_| d.sample_with(&mut || rng.next_unit()) as f64));
        assert_relative_eq!(mean, d.expectation(), max_relative = 0.02);
        assert_relative_eq!(var, d.variance(), max_relative = 0.05);
    }
}

#[test]
fn test_custom_sample_mean() {
    // Density 2x on [0, 1]: mean 2/3.
    let c = CustomDistribution::new(0.0, 1.0, |x| 2.0 * x).unwrap();
    let mut rng = Random::<MersenneTwister64>::seeded(3);
    let (mean, _) = moments((0..100_000).map(|_| c.sample(&mut rng)));
    assert_relative_eq!(mean, 2.0 / 3.0, max_relative = 0.01);
    assert_relative_eq!(c.expectation(), 2.0 / 3.0, epsilon = 1e-9);
}

// ===== Normalisation =====

#[test]
fn test_table_distributions_pmf_sums_to_one() {
    let gibbs = Gibbs::new(&[-2, 0, 3, 7], &[1.0, 0.2, 2.5, -0.4], 1.3).unwrap();
    let hyper = Hypergeometric::new(60, 25, 17).unwrap();
    let neg = NegHypergeometric::new(30, 10, 6).unwrap();
    let binom = Binomial::new(40, 0.17).unwrap();

    let total: f64 = (-2..=7).map(|k| gibbs.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    let total: f64 = (0..=17).map(|k| hyper.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    let total: f64 = (0..=10).map(|k| neg.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    let total: f64 = (0..=40).map(|k| binom.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-10);
}

#[test]
fn test_poisson_pmf_sums_to_one() {
    let p = Poisson::new(15.0).unwrap();
    let total: f64 = (0..200).map(|k| p.pmf(k)).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    assert_relative_eq!(p.cdf(199), 1.0, epsilon = 1e-10);
}

// ===== CDF limits =====

#[test]
fn test_continuous_cdf_limits() {
    let dists: Vec<Box<dyn Continuous>> = vec![
        Box::new(Gaussian::new(0.0, 1.0).unwrap()),
        Box::new(Exponential::new(2.0, 0.0).unwrap()),
        Box::new(Cauchy::new(0.0, 1.0).unwrap()),
        Box::new(Weibull::new(1.0, 1.5).unwrap()),
        Box::new(Maxwell::new(1.0).unwrap()),
        Box::new(CustomDistribution::new(-1.0, 1.0, |x| 1.0 - x * x).unwrap()),
    ];
    for d in &dists {
        let lo = d.min_value().max(-1e300);
        let hi = d.max_value().min(1e300);
        assert!(d.cdf(lo).abs() < 1e-9);
        assert!((d.cdf(hi) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_discrete_cdf_limits() {
    let g = Gibbs::new(&[4, 9], &[0.0, 1.0], 1.0).unwrap();
    assert_eq!(g.cdf(g.min_value() - 1), 0.0);
    assert_eq!(g.cdf(g.max_value()), 1.0);
    let h = Hypergeometric::new(12, 5, 8).unwrap();
    assert_eq!(h.cdf(h.min_value() - 1), 0.0);
    assert_eq!(h.cdf(h.max_value()), 1.0);
}

#[test]
fn test_poisson_cdf_large_lambda() {
    let p = Poisson::new(1000.0).unwrap();
    assert!(p.cdf(2000) > 0.999_999);
    assert_eq!(p.cdf(i64::MAX), 1.0);
    let mut prev = 0.0;
    for k in (0..=3000).step_by(25) {
        let c = p.cdf(k);
        assert!(c >= prev - 1e-12, "cdf({}) = {} fell below {}", k, c, prev);
        prev = c;
    }
    assert_relative_eq!(prev, 1.0, epsilon = 1e-12);
}

#[test]
fn test_table_trailing_zero_weight_never_sampled() {
    // 1/6 + 4/6 + 1/6 sums to 1 - 2^-53 in floating point.
    let table = ProbabilityTable::from_contiguous(0, vec![1.0, 4.0, 1.0, 0.0]).unwrap();
    assert_ne!(table.sample(1.0 - f64::EPSILON / 2.0), 3);
    let mut rng = Random::<MersenneTwister64>::seeded(8);
    for _ in 0..100_000 {
        assert_ne!(table.sample(rng.next_unit()), 3);
    }
}

// ===== Monotonicity =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_continuous_cdf_monotone(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let (x1, x2) = if a <= b { (a, b) } else { (b, a) };
        let dists: Vec<Box<dyn Continuous>> = vec![
            Box::new(Gaussian::new(1.0, 3.0).unwrap()),
            Box::new(Exponential::new(0.7, -2.0).unwrap()),
            Box::new(Cauchy::new(-1.0, 2.0).unwrap()),
            Box::new(Weibull::new(2.0, 0.8).unwrap()),
            Box::new(Maxwell::new(2.5).unwrap()),
        ];
        for d in &dists {
            // erf-based CDFs carry a 1.5e-7 approximation error.
            prop_assert!(d.cdf(x1) <= d.cdf(x2) + 1e-6);
        }
    }

    #[test]
    fn prop_custom_cdf_monotone(a in 0.0f64..=3.0, b in 0.0f64..=3.0) {
        let (x1, x2) = if a <= b { (a, b) } else { (b, a) };
        let c = CustomDistribution::new(0.0, 3.0, |x| (x - 1.0).powi(2) + 0.1).unwrap();
        prop_assert!(c.cdf(x1) <= c.cdf(x2));
    }

    #[test]
    fn prop_discrete_cdf_monotone(a in -5i64..60, b in -5i64..60) {
        let (k1, k2) = if a <= b { (a, b) } else { (b, a) };
        let dists: Vec<Box<dyn Discrete>> = vec![
            Box::new(Poisson::new(9.0).unwrap()),
            Box::new(Binomial::new(30, 0.6).unwrap()),
            Box::new(Geometric::new(0.1).unwrap()),
            Box::new(Hypergeometric::new(40, 18, 22).unwrap()),
            Box::new(Gibbs::new(&[0, 10, 20, 30], &[3.0, 1.0, 2.0, 0.0], 0.5).unwrap()),
        ];
        for d in &dists {
            prop_assert!(d.cdf(k1) <= d.cdf(k2) + 1e-12);
        }
    }

    #[test]
    fn prop_table_samples_stay_in_support(r in 0.0f64..1.0) {
        let h = Hypergeometric::new(25, 10, 18).unwrap();
        let k = h.next(r);
        prop_assert!(k >= h.min_value() && k <= h.max_value());
        prop_assert!(h.pmf(k) > 0.0);
    }
}
