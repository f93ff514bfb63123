//! # forge_distributions: Probability Distributions
//!
//! ## Layer 2 Role
//!
//! forge_distributions turns uniform draws from forge_core generators into
//! samples from named distributions:
//! - Continuous: Gaussian, Exponential, Cauchy, Weibull, Maxwell, Custom
//!   (`continuous`)
//! - Discrete: Bernoulli, Binomial, Geometric, Poisson, Hypergeometric,
//!   Negative-Hypergeometric, Gibbs (`discrete`)
//! - Shared sorted cumulative table with upper-bound lookup (`table`)
//! - Capability traits: `Continuous`, `Discrete` (`traits`)
//! - Error types: `DistributionError` (`error`)
//!
//! Distributions are immutable once built. Sampling state lives in the
//! caller's generator, so one distribution may be sampled from many threads,
//! each with its own `Random<G>`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use forge_core::generators::MersenneTwister64;
//! use forge_core::rng::Random;
//! use forge_distributions::continuous::Gaussian;
//! use forge_distributions::discrete::Bernoulli;
//! use forge_distributions::{Continuous, Discrete};
//!
//! let mut rng = Random::<MersenneTwister64>::seeded(42);
//!
//! let normal = Gaussian::new(5.0, 2.0).unwrap();
//! let x = normal.sample(&mut rng);
//! assert!(x.is_finite());
//! assert_eq!(normal.variance(), 4.0);
//!
//! let coin = Bernoulli::new(0.3).unwrap();
//! assert_eq!(coin.pmf(1), 0.3);
//! assert_eq!(coin.pmf(0), 0.7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod table;
pub mod traits;

pub use error::DistributionError;
pub use table::ProbabilityTable;
pub use traits::{Continuous, Discrete};
