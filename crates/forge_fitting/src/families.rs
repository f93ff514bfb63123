//! Fitting `(x, pdf(x))` samples to the continuous families.
//!
//! | Family | Initial guess | Refinement |
//! |---|---|---|
//! | Gaussian | peak location, peak height | Levenberg-Marquardt |
//! | Cauchy | peak location, peak height | Levenberg-Marquardt |
//! | Maxwell | peak location (mode = √2·a) | Levenberg-Marquardt |
//! | Exponential | regression of `ln y` on `x` | Levenberg-Marquardt |
//! | Weibull | regression of `ln(−ln(1 − F))` on `ln x` | Levenberg-Marquardt |
//!
//! Every fit minimises `Σ (pdf(x_i) − y_i)²`. Parameters that end up
//! negative, zero or NaN are reported as [`FitError::Diverged`].

use std::f64::consts::{PI, SQRT_2};

use forge_distributions::continuous::{Cauchy, Exponential, Gaussian, Maxwell, Weibull};
use forge_distributions::{Continuous, DistributionError};

use crate::config::FitConfig;
use crate::error::FitError;
use crate::regression::linear_regression;
use crate::report::FitReport;
use crate::solver::LevenbergMarquardt;

/// Smallest ordinate kept for logarithmic regression.
const LOG_FLOOR: f64 = 1e-12;

/// Fits a Gaussian `(mu, sigma)`.
///
/// # Errors
/// See the module documentation; also input validation errors from
/// [`validate`].
pub fn fit_gaussian(
    x: &[f64],
    y: &[f64],
    config: &FitConfig,
) -> Result<FitReport<Gaussian>, FitError> {
    validate(x, y, 2)?;
    let (x_peak, y_peak) = peak(x, y);
    let sigma = 1.0 / ((2.0 * PI).sqrt() * y_peak);
    refine(
        "gaussian",
        &["mu", "sigma"],
        x,
        y,
        vec![x_peak, sigma],
        config,
        |p| Gaussian::new(p[0], p[1]),
    )
}

/// Fits a Cauchy `(x0, gamma)`.
///
/// # Errors
/// As for [`fit_gaussian`].
pub fn fit_cauchy(x: &[f64], y: &[f64], config: &FitConfig) -> Result<FitReport<Cauchy>, FitError> {
    validate(x, y, 2)?;
    let (x_peak, y_peak) = peak(x, y);
    refine(
        "cauchy",
        &["x0", "gamma"],
        x,
        y,
        vec![x_peak, 1.0 / (PI * y_peak)],
        config,
        |p| Cauchy::new(p[0], p[1]),
    )
}

/// Fits a Maxwell-Boltzmann scale `a`.
///
/// # Errors
/// As for [`fit_gaussian`].
pub fn fit_maxwell(
    x: &[f64],
    y: &[f64],
    config: &FitConfig,
) -> Result<FitReport<Maxwell>, FitError> {
    validate(x, y, 1)?;
    let (x_peak, _) = peak(x, y);
    refine(
        "maxwell",
        &["a"],
        x,
        y,
        vec![x_peak / SQRT_2],
        config,
        |p| Maxwell::new(p[0]),
    )
}

/// Fits an Exponential `(k, x0)`.
///
/// `ln pdf(x) = ln k + k·x0 − k·x`, so a line through `(x, ln y)` over the
/// points with `y > 1e-12` gives `k = −slope` and
/// `x0 = (intercept − ln k) / k`. Exact exponential data is recovered by the
/// regression alone; noisy data is refined by least squares from there.
///
/// # Errors
/// `FitError::Diverged` when the fitted slope is not negative; otherwise as
/// for [`fit_gaussian`].
pub fn fit_exponential(
    x: &[f64],
    y: &[f64],
    config: &FitConfig,
) -> Result<FitReport<Exponential>, FitError> {
    validate(x, y, 2)?;
    let (xr, zr): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter(|&(_, &yi)| yi > LOG_FLOOR)
        .map(|(&xi, &yi)| (xi, yi.ln()))
        .unzip();
    if xr.len() < 2 {
        return Err(FitError::InsufficientData {
            needed: 2,
            got: xr.len(),
        });
    }

    let line = linear_regression(&xr, &zr)?;
    let k = -line.slope;
    let x0 = (line.intercept - k.ln()) / k;
    tracing::debug!(k, x0, r_squared = line.r_squared, "exponential regression");

    refine(
        "exponential",
        &["k", "x0"],
        x,
        y,
        vec![k, x0],
        config,
        |p| Exponential::new(p[0], p[1]),
    )
}

/// Fits a Weibull `(lambda, k)`.
///
/// Points are sorted by `x`; the empirical CDF is the trapezoidal integral
/// of `y`. A line through `(ln x, ln(−ln(1 − F)))` gives `k = slope` and
/// `lambda = exp(−intercept / k)` as the starting point for the
/// least-squares refinement.
///
/// # Errors
/// As for [`fit_gaussian`].
pub fn fit_weibull(
    x: &[f64],
    y: &[f64],
    config: &FitConfig,
) -> Result<FitReport<Weibull>, FitError> {
    validate(x, y, 2)?;
    let mut points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cdf = 0.0;
    let mut lx = Vec::with_capacity(points.len());
    let mut lz = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        cdf += 0.5 * (y0 + y1) * (x1 - x0);
        if cdf > LOG_FLOOR && cdf < 1.0 && x1 > 0.0 {
            lx.push(x1.ln());
            lz.push((-(1.0 - cdf).ln()).ln());
        }
    }
    if lx.len() < 2 {
        return Err(FitError::InsufficientData {
            needed: 2,
            got: lx.len(),
        });
    }

    let line = linear_regression(&lx, &lz)?;
    let k = line.slope;
    let lambda = (-line.intercept / k).exp();
    tracing::debug!(lambda, k, r_squared = line.r_squared, "weibull initial guess");
    if !(k.is_finite() && k > 0.0 && lambda.is_finite() && lambda > 0.0) {
        return Err(diverged("weibull", vec![lambda, k]));
    }

    refine(
        "weibull",
        &["lambda", "k"],
        x,
        y,
        vec![lambda, k],
        config,
        |p| Weibull::new(p[0], p[1]),
    )
}

/// Checks lengths, finiteness and the minimum point count.
///
/// # Errors
/// - `FitError::LengthMismatch` when `x` and `y` differ in length
/// - `FitError::InsufficientData` for fewer than `n_params` points
/// - `FitError::InvalidData` for any non-finite coordinate
pub fn validate(x: &[f64], y: &[f64], n_params: usize) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < n_params.max(1) {
        return Err(FitError::InsufficientData {
            needed: n_params.max(1),
            got: x.len(),
        });
    }
    if let Some(i) = (0..x.len()).find(|&i| !x[i].is_finite() || !y[i].is_finite()) {
        return Err(FitError::InvalidData(format!(
            "point {} = ({}, {}) is not finite",
            i, x[i], y[i]
        )));
    }
    Ok(())
}

/// Location and height of the largest ordinate.
fn peak(x: &[f64], y: &[f64]) -> (f64, f64) {
    x.iter()
        .zip(y)
        .fold((x[0], f64::NEG_INFINITY), |best, (&xi, &yi)| {
            if yi > best.1 {
                (xi, yi)
            } else {
                best
            }
        })
}

fn diverged(family: &'static str, params: Vec<f64>) -> FitError {
    tracing::debug!(family, ?params, "fit diverged");
    FitError::Diverged { family, params }
}

/// Builds the distribution, mapping domain violations to `Diverged`.
fn build<D, B>(family: &'static str, params: &[f64], make: B) -> Result<D, FitError>
where
    B: Fn(&[f64]) -> Result<D, DistributionError>,
{
    make(params).map_err(|err| match err {
        DistributionError::InvalidParameter { .. } => diverged(family, params.to_vec()),
        other => FitError::Distribution(other),
    })
}

/// Least-squares refinement of `initial` on `pdf(x) − y`.
fn refine<D, B>(
    family: &'static str,
    param_names: &'static [&'static str],
    x: &[f64],
    y: &[f64],
    initial: Vec<f64>,
    config: &FitConfig,
    make: B,
) -> Result<FitReport<D>, FitError>
where
    D: Continuous,
    B: Fn(&[f64]) -> Result<D, DistributionError>,
{
    build(family, &initial, &make)?;

    let residuals = |p: &[f64]| -> Vec<f64> {
        match make(p) {
            Ok(d) => x.iter().zip(y).map(|(&xi, &yi)| d.pdf(xi) - yi).collect(),
            Err(_) => vec![f64::NAN; x.len()],
        }
    };
    let solution = LevenbergMarquardt::new(*config).solve(residuals, initial)?;
    let distribution = build(family, &solution.params, &make)?;

    Ok(FitReport {
        distribution,
        family,
        param_names,
        params: solution.params,
        residual_ss: solution.residual_ss,
        iterations: solution.iterations,
        converged: solution.converged,
    })
}
