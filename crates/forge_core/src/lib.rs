//! # forge_core: Pseudo-Random Generation Core
//!
//! ## Layer 1 (Foundation) Role
//!
//! forge_core is the bottom layer of the randforge workspace, providing:
//! - Unsigned word abstraction over `u32` / `u64` (`types::word`)
//! - 128-bit modular arithmetic and primality testing (`math::bigint`, `math::modular`)
//! - Special functions and quadrature used by the sampling layer (`math::special`, `math::integration`)
//! - The `Generator` contract (`traits`)
//! - The `Random<G>` wrapper supplying derived operations (`rng`)
//! - Concrete generators: XORShift, LFSR, Mersenne Twister, Blum-Blum-Shub,
//!   Naor-Reingold (`generators`)
//! - Statistical diagnostics over generator output (`diagnostics`)
//! - Error types: `RandomError` (`types::error`)
//!
//! ## Reproducibility
//!
//! Every generator is a deterministic state machine. Two instances seeded with
//! the same nonzero seed produce bit-identical sequences. A seed of zero is a
//! reserved sentinel meaning "derive the seed from the wall clock"; such
//! instances are nondeterministic by construction.
//!
//! ## Usage Examples
//!
//! ```rust
//! use forge_core::generators::XorShift32;
//! use forge_core::rng::Random;
//!
//! let mut rng = Random::<XorShift32>::seeded(1234);
//! assert_eq!(rng.next(), 1568607331);
//!
//! let die = rng.next_in_range(1, 6).unwrap();
//! assert!((1..=6).contains(&die));
//!
//! let u = rng.next_unit();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Thread Safety
//!
//! Generators are single-writer state machines; share them across threads only
//! behind external synchronisation (see `rng::default` for the process-wide
//! instance).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod diagnostics;
pub mod generators;
pub mod math;
pub mod rng;
pub mod traits;
pub mod types;
