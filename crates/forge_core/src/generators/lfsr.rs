//! Galois-style linear feedback shift register.
//!
//! Two 64-bit words form a 128-bit register. Each step XORs taps 0, 1, 2 and
//! 7 of the low word into a feedback bit, shifts the whole register right by
//! one with the feedback entering at the top, and appends the new low bit to
//! the output. A `W`-bit output takes `W` steps and is then multiplied by
//! [`OUTPUT_MULTIPLIER`].
//!
//! The first outputs after seeding are the seed bits replayed in reverse,
//! so seeding discards [`DISCARD_BITS`] bits of output.

use super::OUTPUT_MULTIPLIER;
use crate::rng::resolve_seed;
use crate::traits::Generator;
use crate::types::Word;

/// Output bits discarded after every reseed.
pub const DISCARD_BITS: u32 = 6528;

/// Dual-register LFSR emitting words of type `W`.
///
/// # Examples
/// ```
/// use forge_core::generators::Lfsr64;
/// use forge_core::traits::Generator;
///
/// let mut g = Lfsr64::from_seed(1234);
/// assert_eq!(g.generate(), 11216536437779408200);
/// ```
#[derive(Debug, Clone)]
pub struct Lfsr<W> {
    high: u64,
    low: u64,
    _word: std::marker::PhantomData<W>,
}

/// 32-bit output LFSR.
pub type Lfsr32 = Lfsr<u32>;

/// 64-bit output LFSR.
pub type Lfsr64 = Lfsr<u64>;

impl<W: Word> Lfsr<W> {
    /// Register contents as `(high, low)`.
    pub fn registers(&self) -> (u64, u64) {
        (self.high, self.low)
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let s = self.low;
        let feedback = (s ^ (s >> 1) ^ (s >> 2) ^ (s >> 7)) & 1;
        self.low = (s >> 1) | (self.high << 63);
        self.high = (self.high >> 1) | (feedback << 63);
        self.low & 1
    }

    fn load(&mut self, seed: W) {
        let fill = register_fill(seed);
        self.high = fill;
        self.low = fill;
        for _ in 0..DISCARD_BITS / W::BITS {
            self.generate();
        }
    }
}

/// Initial value of both register words for `seed`.
///
/// A zero seed draws a full 64-bit clock seed at any output width. Narrow
/// nonzero seeds are replicated into both halves.
fn register_fill<W: Word>(seed: W) -> u64 {
    if seed.is_zero() {
        return resolve_seed(0u64);
    }
    let seed = seed.as_u64();
    if W::BITS < 64 {
        (seed << 32) | seed
    } else {
        seed
    }
}

impl<W: Word> Generator for Lfsr<W> {
    type Output = W;
    const NAME: &'static str = "lfsr";

    fn from_seed(seed: W) -> Self {
        let mut lfsr = Self {
            high: 0,
            low: 0,
            _word: std::marker::PhantomData,
        };
        lfsr.load(seed);
        lfsr
    }

    fn generate(&mut self) -> W {
        let mut out = W::zero();
        for _ in 0..W::BITS {
            out = (out << 1) | W::truncate(self.step());
        }
        out.wrapping_mul(&W::truncate(OUTPUT_MULTIPLIER))
    }

    fn reseed(&mut self, seed: W) {
        self.load(seed);
    }
}
