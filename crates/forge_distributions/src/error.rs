//! Error types for distribution construction and queries.

use thiserror::Error;

/// Distribution errors.
///
/// # Variants
/// - `InvalidParameter`: A defining parameter violates its support constraint
/// - `OutOfDomain`: Query outside a finite support
/// - `InvalidSupport`: Unusable support points or weights
///
/// # Examples
/// ```
/// use forge_distributions::DistributionError;
///
/// let err = DistributionError::InvalidParameter {
///     name: "sigma",
///     value: -1.0,
///     constraint: "must be positive and finite",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter sigma = -1: must be positive and finite"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A defining parameter is outside its allowed range.
    #[error("Invalid parameter {name} = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Value supplied
        value: f64,
        /// Constraint violated
        constraint: &'static str,
    },

    /// Query point outside `[min, max]`.
    #[error("Query point {x} outside support [{min}, {max}]")]
    OutOfDomain {
        /// The query point
        x: f64,
        /// Lower end of the support
        min: f64,
        /// Upper end of the support
        max: f64,
    },

    /// Support points, energies or weights cannot form a distribution.
    #[error("Invalid support: {0}")]
    InvalidSupport(String),
}

/// Checks `value > 0` and finite.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value,
            constraint: "must be positive and finite",
        })
    }
}

/// Checks `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value,
            constraint: "must be finite",
        })
    }
}
