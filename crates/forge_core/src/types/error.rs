//! Error types for generator construction and derived sampling operations.

use thiserror::Error;

/// Generator and sampling errors.
///
/// Raised immediately at the call site; nothing in the generation core is
/// retried or deferred.
///
/// # Variants
/// - `InvalidRange`: Empty or non-finite range passed to a ranged draw
/// - `EmptySequence`: `choice` / `choice_weighted` on an empty slice
/// - `LengthMismatch`: Items and weights of different length
/// - `InvalidWeights`: Negative, non-finite or all-zero weights
/// - `InvalidModulus`: Generator moduli that violate the algorithm's requirements
/// - `DefaultAlreadyInitialised`: Second initialisation of the default generator
///
/// # Examples
/// ```
/// use forge_core::types::RandomError;
///
/// let err = RandomError::LengthMismatch { items: 3, weights: 2 };
/// assert_eq!(format!("{}", err), "Length mismatch: 3 items but 2 weights");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    /// Range bounds are inverted or not finite.
    #[error("Invalid range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound as supplied
        min: f64,
        /// Upper bound as supplied
        max: f64,
    },

    /// Selection from an empty sequence.
    #[error("Cannot choose from an empty sequence")]
    EmptySequence,

    /// Items and weights differ in length.
    #[error("Length mismatch: {items} items but {weights} weights")]
    LengthMismatch {
        /// Number of items
        items: usize,
        /// Number of weights
        weights: usize,
    },

    /// Weights are unusable for weighted selection.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Modulus parameters rejected at construction.
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),

    /// The process-wide default generator was already initialised.
    #[error("Default generator already initialised")]
    DefaultAlreadyInitialised,
}
