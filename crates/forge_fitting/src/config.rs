//! Solver configuration.

/// Configuration for the damped least-squares solver.
///
/// # Fields
///
/// * `tolerance` - Convergence tolerance on the residual norm
/// * `max_iterations` - Maximum number of iterations
/// * `initial_lambda` - Initial damping factor
/// * `lambda_up` - Factor applied to lambda when a step is rejected
/// * `lambda_down` - Factor applied to lambda when a step is accepted
/// * `min_lambda` - Lower clamp for lambda
/// * `max_lambda` - Upper clamp for lambda
/// * `param_tolerance` - Convergence tolerance on the relative step size
/// * `fd_step` - Relative step of the forward-difference Jacobian
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitConfig {
    /// Convergence tolerance for the residual norm.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Initial damping factor.
    pub initial_lambda: f64,
    /// Factor to increase lambda on a rejected step.
    pub lambda_up: f64,
    /// Factor to decrease lambda on an accepted step.
    pub lambda_down: f64,
    /// Minimum damping factor.
    pub min_lambda: f64,
    /// Maximum damping factor.
    pub max_lambda: f64,
    /// Tolerance for the relative parameter change.
    pub param_tolerance: f64,
    /// Relative finite-difference step.
    pub fd_step: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
            min_lambda: 1e-12,
            max_lambda: 1e12,
            param_tolerance: 1e-10,
            fd_step: 1e-8,
        }
    }
}

impl FitConfig {
    /// Default configuration with the given tolerance and iteration cap.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// Relaxed tolerances for quick exploratory fits.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 50,
            param_tolerance: 1e-7,
            ..Default::default()
        }
    }

    /// Tight tolerances with a larger iteration budget.
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-14,
            max_iterations: 1000,
            param_tolerance: 1e-14,
            ..Default::default()
        }
    }
}
