//! Continuous distributions.
//!
//! | Distribution | Sampling | Support |
//! |---|---|---|
//! | [`Gaussian`] | Box-Muller | ℝ |
//! | [`Exponential`] | Inversion | `[x0, ∞)` |
//! | [`Cauchy`] | Inversion | ℝ |
//! | [`Weibull`] | Inversion | `[0, ∞)` |
//! | [`Maxwell`] | Box-Muller (three normals) | `[0, ∞)` |
//! | [`CustomDistribution`] | Simpson-integrated CDF, linear inversion | `[lower, upper]` |

mod cauchy;
mod custom;
mod exponential;
mod gaussian;
mod maxwell;
mod weibull;

pub use cauchy::Cauchy;
pub use custom::{CustomConfig, CustomDistribution};
pub use exponential::Exponential;
pub use gaussian::Gaussian;
pub use maxwell::Maxwell;
pub use weibull::Weibull;
