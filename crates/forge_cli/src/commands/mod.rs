//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod fit;
pub mod sample;
pub mod stats;
pub mod stream;
