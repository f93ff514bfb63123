//! Special functions used by the distribution layer.
//!
//! - `erf` / `erfc`: Abramowitz and Stegun 7.1.26 (max error 1.5e-7)
//! - `norm_cdf`: standard normal CDF from `erfc`
//! - `ln_gamma`: Lanczos approximation (g = 7, n = 9)
//! - `ln_choose`: log binomial coefficient from `ln_gamma`

use std::f64::consts::{PI, SQRT_2};

/// ln(sqrt(2π))
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Complementary error function.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
///
/// # Examples
/// ```
/// use forge_core::math::special::erfc;
///
/// assert!((erfc(0.0) - 1.0).abs() < 1e-7);
/// assert!((erfc(-10.0) - 2.0).abs() < 1e-7);
/// ```
pub fn erfc(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Error function, `1 - erfc(x)`.
#[inline]
pub fn erf(x: f64) -> f64 {
    1.0 - erfc(x)
}

/// Standard normal cumulative distribution function, Φ(x) = erfc(-x/√2) / 2.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Natural log of |Γ(x)|.
///
/// Non-positive integers are poles and return `+∞`.
///
/// # Examples
/// ```
/// use forge_core::math::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    if x <= 0.0 && x == x.floor() {
        return f64::INFINITY;
    }
    if x < 0.5 {
        // Reflection: ln Γ(x) = ln π - ln|sin(πx)| - ln Γ(1 - x)
        let sin_pi_x = (PI * x).sin().abs();
        return PI.ln() - sin_pi_x.ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = LANCZOS_COEFFICIENTS[0];
    for (i, &c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        sum += c / (x + i as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    LN_SQRT_2PI + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Natural log of the binomial coefficient C(n, k).
///
/// Returns `-∞` when `k > n` (the coefficient is zero).
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_erf_known_values() {
        assert_relative_eq!(erf(0.5), 0.520_499_877_813_046_5, epsilon = 2e-7);
        assert_relative_eq!(erf(1.0), 0.842_700_792_949_714_9, epsilon = 2e-7);
        assert_relative_eq!(erf(-1.0), -0.842_700_792_949_714_9, epsilon = 2e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.7, 1.5, 2.5] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(norm_cdf(1.96), 0.975, epsilon = 1e-4);
    }

    #[test]
    fn test_ln_gamma_factorials() {
        let mut factorial = 1.0_f64;
        for n in 1..20u32 {
            factorial *= n as f64;
            assert_relative_eq!(ln_gamma(n as f64 + 1.0), factorial.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ln_gamma_half() {
        // Γ(1/2) = √π
        assert_relative_eq!(ln_gamma(0.5), 0.5 * PI.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_ln_gamma_pole() {
        assert!(ln_gamma(0.0).is_infinite());
        assert!(ln_gamma(-3.0).is_infinite());
    }

    #[test]
    fn test_ln_choose() {
        assert_relative_eq!(ln_choose(10, 3).exp(), 120.0, epsilon = 1e-9);
        assert_relative_eq!(ln_choose(52, 5).exp(), 2_598_960.0, max_relative = 1e-10);
        assert_eq!(ln_choose(5, 0), 0.0);
        assert_eq!(ln_choose(3, 4), f64::NEG_INFINITY);
    }
}
