//! Mathematical utilities for generation and sampling.
//!
//! This module provides:
//! - `bigint`: [`BigInt128`] with widening multiplication and modular reduction
//! - `modular`: Modular exponentiation, gcd and deterministic primality testing
//! - `special`: Error function, normal CDF and log-gamma
//! - `integration`: Composite Simpson quadrature

pub mod bigint;
pub mod integration;
pub mod modular;
pub mod special;

pub use bigint::BigInt128;
