//! Mersenne Twister, parameterised over the word width.
//!
//! The twist/temper algorithm is shared; the constant table ([`MtParams`])
//! selects MT19937 for `u32` and MT19937-64 for `u64`. State is seeded by
//! the 69069 linear congruential expansion, `state[i] = state[i-1] * 69069
//! mod 2^31`.

use crate::rng::resolve_seed;
use crate::traits::Generator;
use crate::types::Word;

/// Seed substituted when the masked seed is zero.
const FALLBACK_SEED: u64 = 4357;

/// Multiplier of the seed expansion.
const SEED_MULTIPLIER: u64 = 69069;

/// Mask applied during seed expansion (mod 2^31).
const SEED_MASK: u64 = 0x7FFF_FFFF;

/// Constant table of a Mersenne Twister variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MtParams<W> {
    /// Degree of recurrence (state length).
    pub n: usize,
    /// Middle word offset.
    pub m: usize,
    /// Twist matrix coefficients.
    pub a: W,
    /// Mask selecting the upper `w - r` bits.
    pub upper_mask: W,
    /// Mask selecting the lower `r` bits.
    pub lower_mask: W,
    /// Tempering shift `u` and mask `d`.
    pub u: (usize, W),
    /// Tempering shift `s` and mask `b`.
    pub s: (usize, W),
    /// Tempering shift `t` and mask `c`.
    pub t: (usize, W),
    /// Final tempering shift `l`.
    pub l: usize,
}

impl MtParams<u32> {
    /// MT19937.
    pub const fn mt19937() -> Self {
        Self {
            n: 624,
            m: 397,
            a: 0x9908_B0DF,
            upper_mask: 0x8000_0000,
            lower_mask: 0x7FFF_FFFF,
            u: (11, 0xFFFF_FFFF),
            s: (7, 0x9D2C_5680),
            t: (15, 0xEFC6_0000),
            l: 18,
        }
    }
}

impl MtParams<u64> {
    /// MT19937-64.
    pub const fn mt19937_64() -> Self {
        Self {
            n: 312,
            m: 156,
            a: 0xB502_6F5A_A966_19E9,
            upper_mask: 0xFFFF_FFFF_8000_0000,
            lower_mask: 0x7FFF_FFFF,
            u: (29, 0x5555_5555_5555_5555),
            s: (17, 0x71D6_7FFF_EDA6_0000),
            t: (37, 0xFFF7_EEE0_0000_0000),
            l: 43,
        }
    }
}

/// Word widths with a canonical Mersenne Twister table.
pub trait MtWord: Word {
    /// Canonical parameters for this width.
    fn canonical_params() -> MtParams<Self>;
}

impl MtWord for u32 {
    fn canonical_params() -> MtParams<Self> {
        MtParams::mt19937()
    }
}

impl MtWord for u64 {
    fn canonical_params() -> MtParams<Self> {
        MtParams::mt19937_64()
    }
}

/// Mersenne Twister over words of type `W`.
///
/// # Examples
/// ```
/// use forge_core::generators::MersenneTwister32;
/// use forge_core::traits::Generator;
///
/// let mut mt = MersenneTwister32::from_seed(5489);
/// assert_eq!(mt.generate(), 876359936);
/// ```
#[derive(Debug, Clone)]
pub struct MersenneTwister<W> {
    state: Vec<W>,
    index: usize,
    params: MtParams<W>,
}

/// MT19937.
pub type MersenneTwister32 = MersenneTwister<u32>;

/// MT19937-64.
pub type MersenneTwister64 = MersenneTwister<u64>;

impl<W: Word> MersenneTwister<W> {
    /// Constructs with an explicit constant table.
    ///
    /// `params.n` must exceed `params.m`; the state buffer is sized to `n`.
    pub fn with_params(seed: W, params: MtParams<W>) -> Self {
        let mut mt = Self {
            state: vec![W::zero(); params.n],
            index: params.n,
            params,
        };
        mt.load(seed);
        mt
    }

    /// Active constant table.
    pub fn params(&self) -> &MtParams<W> {
        &self.params
    }

    fn load(&mut self, seed: W) {
        let mut word = resolve_seed(seed).as_u64() & SEED_MASK;
        if word == 0 {
            word = FALLBACK_SEED;
        }
        for slot in self.state.iter_mut() {
            *slot = W::truncate(word);
            word = word.wrapping_mul(SEED_MULTIPLIER) & SEED_MASK;
        }
        self.index = self.params.n;
    }

    fn twist(&mut self) {
        let MtParams {
            n,
            m,
            a,
            upper_mask,
            lower_mask,
            ..
        } = self.params;
        for k in 0..n {
            let y = (self.state[k] & upper_mask) | (self.state[(k + 1) % n] & lower_mask);
            let mut next = self.state[(k + m) % n] ^ (y >> 1);
            if y.low_bit() {
                next = next ^ a;
            }
            self.state[k] = next;
        }
        self.index = 0;
    }
}

impl<W: MtWord> Generator for MersenneTwister<W> {
    type Output = W;
    const NAME: &'static str = "mersenne";

    fn from_seed(seed: W) -> Self {
        Self::with_params(seed, W::canonical_params())
    }

    fn generate(&mut self) -> W {
        if self.index >= self.params.n {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        let (u, d) = self.params.u;
        let (s, b) = self.params.s;
        let (t, c) = self.params.t;
        y = y ^ ((y >> u) & d);
        y = y ^ ((y << s) & b);
        y = y ^ ((y << t) & c);
        y ^ (y >> self.params.l)
    }

    fn reseed(&mut self, seed: W) {
        self.load(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_sequence_32() {
        let mut mt = MersenneTwister32::from_seed(5489);
        let out: Vec<u32> = (0..3).map(|_| mt.generate()).collect();
        assert_eq!(out, vec![876359936, 1965004871, 387774767]);
    }

    #[test]
    fn test_golden_sequence_64() {
        let mut mt = MersenneTwister64::from_seed(5489);
        let out: Vec<u64> = (0..3).map(|_| mt.generate()).collect();
        assert_eq!(
            out,
            vec![15706052814133797889, 9305476780833233642, 5652073941063626289]
        );
    }

    #[test]
    fn test_state_sized_to_params() {
        assert_eq!(MersenneTwister32::from_seed(1).state.len(), 624);
        assert_eq!(MersenneTwister64::from_seed(1).state.len(), 312);
    }

    #[test]
    fn test_masked_zero_seed_uses_fallback() {
        // 2^31 masks to zero and falls back to 4357.
        let mut a = MersenneTwister32::from_seed(0x8000_0000);
        let mut b = MersenneTwister32::from_seed(4357);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_sequence_spans_multiple_twists() {
        let mut a = MersenneTwister64::from_seed(77);
        let mut b = MersenneTwister64::from_seed(77);
        for _ in 0..1_000 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}
