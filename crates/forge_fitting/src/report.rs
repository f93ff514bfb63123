//! Fit results.

/// A fitted distribution together with solver diagnostics.
///
/// With the `serde` feature the report serialises everything except the
/// distribution value itself; `family`, `param_names` and `params` carry the
/// same information.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FitReport<D> {
    /// The fitted distribution.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub distribution: D,
    /// Family name.
    pub family: &'static str,
    /// Parameter names, aligned with `params`.
    pub param_names: &'static [&'static str],
    /// Fitted parameters.
    pub params: Vec<f64>,
    /// Residual sum of squares of `pdf(x) - y` at the fitted parameters.
    pub residual_ss: f64,
    /// Solver iterations; 0 when the initial guess already met the tolerance.
    pub iterations: usize,
    /// Whether the solver met a convergence criterion.
    pub converged: bool,
}

impl<D> FitReport<D> {
    /// Root mean square residual over `n_points` points.
    pub fn rmse(&self, n_points: usize) -> f64 {
        if n_points == 0 {
            return 0.0;
        }
        (self.residual_ss / n_points as f64).sqrt()
    }

    /// Looks up a fitted parameter by name.
    pub fn param(&self, name: &str) -> Option<f64> {
        self.param_names
            .iter()
            .position(|&n| n == name)
            .and_then(|i| self.params.get(i).copied())
    }
}
