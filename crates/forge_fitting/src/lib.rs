//! # forge_fitting: Parameter Recovery
//!
//! ## Layer 3 Role
//!
//! forge_fitting recovers distribution parameters from `(x, pdf(x))` sample
//! pairs, consuming only the read interface of forge_distributions:
//! - Damped Gauss-Newton least squares (`solver`)
//! - Ordinary least-squares lines for log-linearised families (`regression`)
//! - Per-family fits with heuristic starting points (`families`)
//! - Solver settings (`config`) and results (`report`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use forge_distributions::continuous::Gaussian;
//! use forge_distributions::Continuous;
//! use forge_fitting::{fit_gaussian, FitConfig};
//!
//! let truth = Gaussian::new(1.0, 0.5).unwrap();
//! let x: Vec<f64> = (0..=40).map(|i| -1.0 + 0.1 * i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&v| truth.pdf(v)).collect();
//!
//! let report = fit_gaussian(&x, &y, &FitConfig::default()).unwrap();
//! assert!((report.distribution.mu() - 1.0).abs() < 1e-6);
//! assert!((report.distribution.sigma() - 0.5).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for [`FitReport`], serde derives for [`FitConfig`]
//!   and [`LinearFit`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod families;
pub mod regression;
pub mod report;
pub mod solver;

pub use config::FitConfig;
pub use error::FitError;
pub use families::{fit_cauchy, fit_exponential, fit_gaussian, fit_maxwell, fit_weibull};
pub use regression::{linear_regression, LinearFit};
pub use report::FitReport;
pub use solver::{LevenbergMarquardt, Solution};
