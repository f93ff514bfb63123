//! Unsigned machine words emitted by generators.

use num_traits::{PrimInt, Unsigned, WrappingMul};
use std::fmt::{Debug, Display};

/// Fixed-width unsigned integer a generator emits.
///
/// Implemented for `u32` and `u64`. Conversion from `u64` truncates rather
/// than fails, matching how seeds and constants are narrowed to the
/// word width throughout the generators.
pub trait Word:
    PrimInt + Unsigned + WrappingMul + Debug + Display + Default + Send + Sync + 'static
{
    /// Width in bits.
    const BITS: u32;

    /// Truncating conversion from a `u64`.
    fn truncate(value: u64) -> Self;

    /// Widening conversion to a `u64`.
    fn as_u64(self) -> u64;

    /// Conversion to `f64` (rounds for values above 2^53).
    fn as_f64(self) -> f64;

    /// Lowest bit as a `bool`.
    #[inline]
    fn low_bit(self) -> bool {
        self & Self::one() == Self::one()
    }
}

impl Word for u32 {
    const BITS: u32 = 32;

    #[inline]
    fn truncate(value: u64) -> Self {
        value as u32
    }

    #[inline]
    fn as_u64(self) -> u64 {
        self as u64
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Word for u64 {
    const BITS: u32 = 64;

    #[inline]
    fn truncate(value: u64) -> Self {
        value
    }

    #[inline]
    fn as_u64(self) -> u64 {
        self
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
