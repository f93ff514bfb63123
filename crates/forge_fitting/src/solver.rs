//! Damped Gauss-Newton (Levenberg-Marquardt) least squares.
//!
//! Each iteration solves
//!
//! ```text
//! (JᵀJ + λI) δ = −Jᵀr
//! ```
//!
//! for the step `δ`, where `J` is a forward-difference Jacobian of the
//! residual vector `r`. Steps that lower the residual sum of squares are
//! accepted and relax the damping; rejected steps increase it, moving the
//! update towards a short gradient-descent step.
//!
//! Residual functions may return non-finite values for infeasible
//! parameters (a negative scale, say); such trial points are never accepted.

use crate::config::FitConfig;
use crate::error::FitError;

/// Outcome of a least-squares solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final parameters.
    pub params: Vec<f64>,
    /// Final residual sum of squares.
    pub residual_ss: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether a convergence criterion was met.
    pub converged: bool,
    /// Final damping factor.
    pub final_lambda: f64,
}

impl Solution {
    /// Root mean square residual over `n_observations` points.
    pub fn rmse(&self, n_observations: usize) -> f64 {
        if n_observations == 0 {
            return 0.0;
        }
        (self.residual_ss / n_observations as f64).sqrt()
    }
}

/// Levenberg-Marquardt solver for `min_p ||r(p)||²`.
///
/// # Example
///
/// ```
/// use forge_fitting::{FitConfig, LevenbergMarquardt};
///
/// // y = a * exp(-b * x)
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y: Vec<f64> = x.iter().map(|&x: &f64| 2.0 * (-0.5 * x).exp()).collect();
///
/// let solver = LevenbergMarquardt::new(FitConfig::default());
/// let solution = solver
///     .solve(
///         |p: &[f64]| x.iter().zip(&y).map(|(&x, &y)| p[0] * (-p[1] * x).exp() - y).collect(),
///         vec![1.0, 1.0],
///     )
///     .unwrap();
///
/// assert!(solution.converged);
/// assert!((solution.params[0] - 2.0).abs() < 1e-6);
/// assert!((solution.params[1] - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct LevenbergMarquardt {
    config: FitConfig,
}

impl LevenbergMarquardt {
    /// Creates a solver.
    pub fn new(config: FitConfig) -> Self {
        Self { config }
    }

    /// Solver configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Minimises the squared norm of `residuals` starting from `initial`.
    ///
    /// Running out of iterations is not an error: the best point found is
    /// returned with `converged == false`.
    ///
    /// # Errors
    /// - `FitError::InsufficientData` when the parameter or residual vector
    ///   is empty
    /// - `FitError::InvalidData` when the residuals at `initial` are not
    ///   finite
    pub fn solve<F>(&self, residuals: F, initial: Vec<f64>) -> Result<Solution, FitError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let cfg = &self.config;
        if initial.is_empty() {
            return Err(FitError::InsufficientData { needed: 1, got: 0 });
        }

        let mut params = initial;
        let mut lambda = cfg.initial_lambda;
        let mut r = residuals(&params);
        if r.is_empty() {
            return Err(FitError::InsufficientData {
                needed: params.len(),
                got: 0,
            });
        }
        let mut ss = sum_of_squares(&r);
        if !ss.is_finite() {
            return Err(FitError::InvalidData(format!(
                "residuals not finite at initial parameters {:?}",
                params
            )));
        }

        for iteration in 0..cfg.max_iterations {
            if ss.sqrt() < cfg.tolerance {
                return Ok(self.finish(params, ss, iteration, true, lambda));
            }

            let jacobian = forward_jacobian(&residuals, &params, &r, cfg.fd_step);
            let delta = match normal_step(&jacobian, &r, lambda) {
                Some(d) => d,
                None => {
                    lambda = (lambda * cfg.lambda_up).min(cfg.max_lambda);
                    continue;
                }
            };

            let step = norm(&delta);
            let scale = norm(&params).max(1.0);
            if step / scale < cfg.param_tolerance {
                return Ok(self.finish(params, ss, iteration, true, lambda));
            }

            let trial: Vec<f64> = params.iter().zip(&delta).map(|(p, d)| p + d).collect();
            let trial_r = residuals(&trial);
            let trial_ss = sum_of_squares(&trial_r);
            tracing::trace!(iteration, ss, trial_ss, lambda, "lm step");

            if trial_ss < ss {
                params = trial;
                r = trial_r;
                ss = trial_ss;
                lambda = (lambda * cfg.lambda_down).max(cfg.min_lambda);
            } else {
                lambda = (lambda * cfg.lambda_up).min(cfg.max_lambda);
            }
        }

        Ok(self.finish(params, ss, cfg.max_iterations, false, lambda))
    }

    fn finish(
        &self,
        params: Vec<f64>,
        residual_ss: f64,
        iterations: usize,
        converged: bool,
        final_lambda: f64,
    ) -> Solution {
        tracing::debug!(?params, residual_ss, iterations, converged, "least squares finished");
        Solution {
            params,
            residual_ss,
            iterations,
            converged,
            final_lambda,
        }
    }
}

impl Default for LevenbergMarquardt {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}

/// Forward-difference Jacobian, row per residual.
fn forward_jacobian<F>(residuals: &F, params: &[f64], r0: &[f64], eps: f64) -> Vec<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let mut jacobian = vec![vec![0.0; params.len()]; r0.len()];
    let mut shifted = params.to_vec();

    for j in 0..params.len() {
        let h = eps * params[j].abs().max(1.0);
        shifted[j] = params[j] + h;
        let r_plus = residuals(&shifted);
        shifted[j] = params[j];

        for (row, (plus, base)) in jacobian.iter_mut().zip(r_plus.iter().zip(r0)) {
            row[j] = (plus - base) / h;
        }
    }

    jacobian
}

/// Solves `(JᵀJ + λI) δ = −Jᵀr`.
fn normal_step(jacobian: &[Vec<f64>], r: &[f64], lambda: f64) -> Option<Vec<f64>> {
    let n = jacobian.first()?.len();
    let mut jtj = vec![vec![0.0; n]; n];
    let mut jtr = vec![0.0; n];

    for (row, &ri) in jacobian.iter().zip(r) {
        for i in 0..n {
            jtr[i] -= row[i] * ri;
            for j in 0..=i {
                jtj[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..n {
        for j in 0..i {
            jtj[j][i] = jtj[i][j];
        }
        jtj[i][i] += lambda;
    }

    cholesky_solve(&jtj, &jtr)
}

#[inline]
fn sum_of_squares(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

#[inline]
fn norm(v: &[f64]) -> f64 {
    sum_of_squares(v).sqrt()
}

/// Solves `A x = b` for symmetric positive definite `A`.
///
/// Returns `None` when `A` is not positive definite (including NaN entries).
pub(crate) fn cholesky_solve(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // A = L Lᵀ
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let sum = a[i][j] - (0..j).map(|k| l[i][k] * l[j][k]).sum::<f64>();
            if i == j {
                if !sum.is_finite() || sum <= 0.0 {
                    return None;
                }
                l[i][i] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // L y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let sum = b[i] - (0..i).map(|j| l[i][j] * y[j]).sum::<f64>();
        y[i] = sum / l[i][i];
    }

    // Lᵀ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let sum = y[i] - ((i + 1)..n).map(|j| l[j][i] * x[j]).sum::<f64>();
        x[i] = sum / l[i][i];
    }

    x.iter().all(|v| v.is_finite()).then_some(x)
}
