//! Core word and error types.
//!
//! This module provides:
//! - `word`: The [`Word`] abstraction over the unsigned widths generators emit
//! - `error`: Structured error type for generator and sampling operations
//!
//! # Re-exports
//!
//! - [`Word`] from `word`
//! - [`RandomError`] from `error`

pub mod error;
pub mod word;

pub use error::RandomError;
pub use word::Word;
