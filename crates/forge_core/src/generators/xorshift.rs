//! XORShift* generator.
//!
//! Three shift/XOR steps over a single state word, followed by a
//! multiplication of the output by [`OUTPUT_MULTIPLIER`] truncated to the
//! word width. The state itself is never multiplied.

use super::OUTPUT_MULTIPLIER;
use crate::rng::resolve_seed;
use crate::traits::Generator;
use crate::types::Word;

/// Shift triple and output multiplier for [`XorShift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShiftParams {
    /// First left shift.
    pub a: usize,
    /// Right shift.
    pub b: usize,
    /// Second left shift.
    pub c: usize,
    /// Output multiplier (truncated to the word width).
    pub multiplier: u64,
}

impl XorShiftParams {
    /// Marsaglia's (13, 17, 5) triple for 32-bit words.
    pub const fn word32() -> Self {
        Self {
            a: 13,
            b: 17,
            c: 5,
            multiplier: OUTPUT_MULTIPLIER,
        }
    }

    /// The (13, 7, 17) triple for 64-bit words.
    pub const fn word64() -> Self {
        Self {
            a: 13,
            b: 7,
            c: 17,
            multiplier: OUTPUT_MULTIPLIER,
        }
    }

    /// Canonical parameters for a word of `bits` width.
    pub const fn for_width(bits: u32) -> Self {
        if bits <= 32 {
            Self::word32()
        } else {
            Self::word64()
        }
    }
}

/// XORShift* over a word of type `W`.
///
/// # Examples
/// ```
/// use forge_core::generators::XorShift32;
/// use forge_core::traits::Generator;
///
/// let mut g = XorShift32::from_seed(1234);
/// assert_eq!(g.generate(), 1568607331);
/// ```
#[derive(Debug, Clone)]
pub struct XorShift<W> {
    state: W,
    params: XorShiftParams,
}

/// 32-bit XORShift*.
pub type XorShift32 = XorShift<u32>;

/// 64-bit XORShift*.
pub type XorShift64 = XorShift<u64>;

impl<W: Word> XorShift<W> {
    /// Constructs with explicit shift parameters.
    pub fn with_params(seed: W, params: XorShiftParams) -> Self {
        Self {
            state: resolve_seed(seed),
            params,
        }
    }

    /// Active parameters.
    pub fn params(&self) -> XorShiftParams {
        self.params
    }
}

impl<W: Word> Generator for XorShift<W> {
    type Output = W;
    const NAME: &'static str = "xorshift";

    fn from_seed(seed: W) -> Self {
        Self::with_params(seed, XorShiftParams::for_width(W::BITS))
    }

    #[inline]
    fn generate(&mut self) -> W {
        let XorShiftParams { a, b, c, multiplier } = self.params;
        let mut s = self.state;
        s = s ^ (s << a);
        s = s ^ (s >> b);
        s = s ^ (s << c);
        self.state = s;
        s.wrapping_mul(&W::truncate(multiplier))
    }

    fn reseed(&mut self, seed: W) {
        self.state = resolve_seed(seed);
    }
}
