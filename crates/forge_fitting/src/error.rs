//! Error types for curve fitting.

use forge_distributions::DistributionError;
use thiserror::Error;

/// Fitting errors.
///
/// # Variants
/// - `LengthMismatch`: `x` and `y` differ in length
/// - `InsufficientData`: Fewer usable points than free parameters
/// - `InvalidData`: Non-finite coordinates
/// - `Degenerate`: Regression abscissae have no spread
/// - `Diverged`: Recovered parameters are outside the family's domain
/// - `Distribution`: The fitted parameters were rejected by the family
///
/// # Examples
/// ```
/// use forge_fitting::FitError;
///
/// let err = FitError::LengthMismatch { x: 10, y: 9 };
/// assert_eq!(format!("{}", err), "Length mismatch: 10 x values, 9 y values");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Coordinate vectors differ in length.
    #[error("Length mismatch: {x} x values, {y} y values")]
    LengthMismatch {
        /// Number of abscissae
        x: usize,
        /// Number of ordinates
        y: usize,
    },

    /// Too few usable points.
    #[error("Insufficient data: need at least {needed} points, got {got}")]
    InsufficientData {
        /// Minimum number of points
        needed: usize,
        /// Points available after filtering
        got: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Linear regression over abscissae with zero variance.
    #[error("Degenerate regression: {0}")]
    Degenerate(String),

    /// Parameters left the family's domain (negative, zero or NaN).
    #[error("Could not fit data to {family}: parameters diverged to {params:?}")]
    Diverged {
        /// Distribution family
        family: &'static str,
        /// Last parameter vector
        params: Vec<f64>,
    },

    /// The family rejected the parameters.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}
