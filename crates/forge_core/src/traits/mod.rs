//! Capability traits.
//!
//! This module provides:
//! - `generator`: The [`Generator`] contract every algorithm implements

pub mod generator;

pub use generator::Generator;
