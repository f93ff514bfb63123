//! CLI error type.

use forge_core::types::RandomError;
use forge_distributions::DistributionError;
use forge_fitting::FitError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `forge` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generator-level failure.
    #[error("Generator error: {0}")]
    Random(#[from] RandomError),

    /// Distribution construction failure.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Fitting failure.
    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed or unsupported argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV input failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
