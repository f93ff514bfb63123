//! Distribution defined by a user-supplied density on a finite interval.
//!
//! The density is integrated once with Simpson's rule into a cumulative
//! table over an evenly spaced grid. The table normalises the density,
//! answers CDF queries (with a Simpson correction inside the bracketing
//! cell) and inverts uniform draws by linear interpolation.

use crate::error::{require_finite, DistributionError};
use crate::traits::Continuous;
use forge_core::math::integration::{cumulative_simpson, simpson};
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

/// Integration settings for [`CustomDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomConfig {
    /// Number of grid cells in the cumulative table.
    pub steps: usize,
}

impl Default for CustomConfig {
    fn default() -> Self {
        Self { steps: 1000 }
    }
}

type DensityFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Continuous distribution from an arbitrary non-negative density on
/// `[lower, upper]`.
///
/// The density need not integrate to one; it is divided by its integrated
/// mass. Queries outside the interval return NaN from `pdf` / `cdf` and
/// an error from `try_pdf` / `try_cdf`.
///
/// # Examples
/// ```
/// use forge_distributions::continuous::CustomDistribution;
/// use forge_distributions::Continuous;
///
/// // Triangular density on [0, 2], unnormalised.
/// let tri = CustomDistribution::new(0.0, 2.0, |x| if x < 1.0 { x } else { 2.0 - x }).unwrap();
/// assert!((tri.cdf(1.0) - 0.5).abs() < 1e-9);
/// assert!((tri.expectation() - 1.0).abs() < 1e-9);
/// assert!(tri.pdf(3.0).is_nan());
/// ```
#[derive(Clone)]
pub struct CustomDistribution {
    lower: f64,
    upper: f64,
    density: DensityFn,
    mass: f64,
    grid: Vec<f64>,
    cumulative: Vec<f64>,
    mean: f64,
    variance: f64,
}

impl CustomDistribution {
    /// Builds with the default integration settings.
    ///
    /// # Errors
    /// See [`CustomDistribution::with_config`].
    pub fn new<F>(lower: f64, upper: f64, density: F) -> Result<Self, DistributionError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::with_config(lower, upper, density, CustomConfig::default())
    }

    /// Builds with explicit integration settings.
    ///
    /// # Errors
    /// - `DistributionError::InvalidParameter` when the bounds are not
    ///   finite with `lower < upper`, or `steps` is zero
    /// - `DistributionError::InvalidSupport` when the density is negative
    ///   or non-finite at any integration point, or integrates to a non-positive mass
    pub fn with_config<F>(
        lower: f64,
        upper: f64,
        density: F,
        config: CustomConfig,
    ) -> Result<Self, DistributionError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        require_finite("lower", lower)?;
        require_finite("upper", upper)?;
        if lower >= upper {
            return Err(DistributionError::InvalidParameter {
                name: "upper",
                value: upper,
                constraint: "must exceed lower",
            });
        }
        if config.steps == 0 {
            return Err(DistributionError::InvalidParameter {
                name: "steps",
                value: 0.0,
                constraint: "must be at least 1",
            });
        }

        let density: DensityFn = Arc::new(density);
        // Every point the integrator touches is checked, cell midpoints
        // included, so the cumulative table is non-decreasing.
        let invalid = Cell::new(None);
        let (grid, raw) = cumulative_simpson(
            |x| {
                let y = density(x);
                if (!y.is_finite() || y < 0.0) && invalid.get().is_none() {
                    invalid.set(Some(x));
                }
                y
            },
            lower,
            upper,
            config.steps,
        );
        if let Some(x) = invalid.get() {
            return Err(DistributionError::InvalidSupport(format!(
                "density at {} is negative or not finite",
                x
            )));
        }
        let mass = raw[raw.len() - 1];
        if mass.is_nan() || mass <= 0.0 || !mass.is_finite() {
            return Err(DistributionError::InvalidSupport(format!(
                "density integrates to {} over [{}, {}]",
                mass, lower, upper
            )));
        }

        let cumulative: Vec<f64> = raw.iter().map(|c| (c / mass).clamp(0.0, 1.0)).collect();
        let steps = config.steps.max(2);
        let mean = simpson(|x| x * density(x), lower, upper, steps) / mass;
        let variance = simpson(|x| (x - mean).powi(2) * density(x), lower, upper, steps) / mass;
        tracing::trace!(lower, upper, mass, mean, variance, "custom distribution tabulated");

        Ok(Self {
            lower,
            upper,
            density,
            mass,
            grid,
            cumulative,
            mean,
            variance,
        })
    }

    /// Integrated mass of the unnormalised density.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Grid points of the cumulative table.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Normalised cumulative table aligned with [`grid`](Self::grid).
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Inverse CDF of a uniform `[0, 1)` draw.
    ///
    /// Finds the first table entry whose cumulative value exceeds `r` and
    /// interpolates linearly within that cell.
    pub fn next(&self, r: f64) -> f64 {
        let i = self.cumulative.partition_point(|&c| c <= r);
        if i == 0 {
            return self.lower;
        }
        if i >= self.cumulative.len() {
            return self.upper;
        }
        let (c0, c1) = (self.cumulative[i - 1], self.cumulative[i]);
        let (x0, x1) = (self.grid[i - 1], self.grid[i]);
        x0 + (r - c0) / (c1 - c0) * (x1 - x0)
    }

    fn in_domain(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    fn out_of_domain(&self, x: f64) -> DistributionError {
        DistributionError::OutOfDomain {
            x,
            min: self.lower,
            max: self.upper,
        }
    }
}

impl fmt::Debug for CustomDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDistribution")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("mass", &self.mass)
            .field("steps", &(self.grid.len() - 1))
            .finish()
    }
}

impl Continuous for CustomDistribution {
    fn pdf(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        (self.density)(x) / self.mass
    }

    fn cdf(&self, x: f64) -> f64 {
        if !self.in_domain(x) {
            return f64::NAN;
        }
        let i = self.grid.partition_point(|&g| g <= x);
        if i >= self.grid.len() {
            return 1.0;
        }
        // grid[i - 1] <= x < grid[i]
        let start = self.grid[i - 1];
        let partial = simpson(|t| (self.density)(t), start, x, 2) / self.mass;
        (self.cumulative[i - 1] + partial).clamp(0.0, self.cumulative[i])
    }

    fn try_pdf(&self, x: f64) -> Result<f64, DistributionError> {
        if self.in_domain(x) {
            Ok(self.pdf(x))
        } else {
            Err(self.out_of_domain(x))
        }
    }

    fn try_cdf(&self, x: f64) -> Result<f64, DistributionError> {
        if self.in_domain(x) {
            Ok(self.cdf(x))
        } else {
            Err(self.out_of_domain(x))
        }
    }

    fn expectation(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn min_value(&self) -> f64 {
        self.lower
    }

    fn max_value(&self) -> f64 {
        self.upper
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> f64 {
        self.next(unit())
    }
}
