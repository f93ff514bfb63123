//! Derived sampling operations over any [`Generator`](crate::traits::Generator).
//!
//! This module provides:
//! - `random`: [`Random`], the wrapper supplying unit, range, choice and shuffle
//! - `seed`: Clock-derived seed substitution for the zero sentinel
//! - `default`: An explicitly initialised process-wide generator

pub mod default;
pub mod random;
pub mod seed;

pub use default::{init_default_generator, with_default_generator, DefaultGenerator};
pub use random::Random;
pub use seed::{clock_seed, resolve_seed};
