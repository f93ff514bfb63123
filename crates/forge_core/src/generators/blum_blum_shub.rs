//! Blum-Blum-Shub quadratic residue generator.
//!
//! The state is squared modulo `n = p·q` with `p ≡ q ≡ 3 (mod 4)`. Each
//! squaring contributes its least significant bit or byte to the output
//! word. The state is a full 128-bit residue handled by [`BigInt128`].
//!
//! Two absorbing conditions are escaped by adding [`PERTURBATION`]:
//! a seed sharing a factor with `n` is perturbed until coprime, and a state
//! that collapses to 0 or 1 after squaring is perturbed once.

use crate::math::modular::is_prime;
use crate::math::BigInt128;
use crate::rng::resolve_seed;
use crate::traits::Generator;
use crate::types::{RandomError, Word};
use std::marker::PhantomData;

/// Additive constant used to escape non-coprime and absorbing states.
pub const PERTURBATION: u64 = 429_496_737;

/// Default prime `p = 2^64 - 189`.
pub const DEFAULT_P: u64 = u64::MAX - 188;

/// Default prime `q = 2^64 - 257`.
pub const DEFAULT_Q: u64 = u64::MAX - 256;

/// Bits taken from each squared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extraction {
    /// Least significant bit; `W::BITS` squarings per output.
    Bit,
    /// Least significant byte; `W::BITS / 8` squarings per output.
    #[default]
    Byte,
}

/// Modulus factors and extraction mode for [`BlumBlumShub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BbsParams {
    /// First prime factor.
    pub p: u64,
    /// Second prime factor.
    pub q: u64,
    /// Output extraction mode.
    pub extraction: Extraction,
}

impl Default for BbsParams {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            q: DEFAULT_Q,
            extraction: Extraction::Byte,
        }
    }
}

impl BbsParams {
    /// Checks that `p` and `q` are distinct primes, each ≡ 3 (mod 4), and
    /// that neither divides [`PERTURBATION`].
    ///
    /// # Errors
    /// `RandomError::InvalidModulus` describing the first violation.
    pub fn validate(&self) -> Result<(), RandomError> {
        if self.p == self.q {
            return Err(RandomError::InvalidModulus(format!(
                "p and q must be distinct, both are {}",
                self.p
            )));
        }
        for (name, v) in [("p", self.p), ("q", self.q)] {
            if !is_prime(v) {
                return Err(RandomError::InvalidModulus(format!(
                    "{} = {} is not prime",
                    name, v
                )));
            }
            if v % 4 != 3 {
                return Err(RandomError::InvalidModulus(format!(
                    "{} = {} is not congruent to 3 mod 4",
                    name, v
                )));
            }
            if PERTURBATION % v == 0 {
                return Err(RandomError::InvalidModulus(format!(
                    "{} = {} divides the perturbation constant",
                    name, v
                )));
            }
        }
        Ok(())
    }

    /// Modulus `p·q`.
    pub fn modulus(&self) -> BigInt128 {
        BigInt128::new(self.p as u128 * self.q as u128)
    }
}

/// Blum-Blum-Shub generator emitting words of type `W`.
///
/// # Examples
/// ```
/// use forge_core::generators::{BlumBlumShub32, Extraction};
/// use forge_core::traits::Generator;
///
/// let mut bbs = BlumBlumShub32::from_seed(1234);
/// assert_eq!(bbs.generate(), 1141899313);
///
/// // Small moduli are accepted when they satisfy the Blum conditions.
/// let custom = BlumBlumShub32::with_primes(499, 547, 1234, Extraction::Bit);
/// assert!(custom.is_ok());
/// assert!(BlumBlumShub32::with_primes(13, 547, 1234, Extraction::Bit).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BlumBlumShub<W> {
    state: BigInt128,
    modulus: BigInt128,
    params: BbsParams,
    _word: PhantomData<W>,
}

/// 32-bit output Blum-Blum-Shub.
pub type BlumBlumShub32 = BlumBlumShub<u32>;

/// 64-bit output Blum-Blum-Shub.
pub type BlumBlumShub64 = BlumBlumShub<u64>;

impl<W: Word> BlumBlumShub<W> {
    /// Constructs over `n = p·q` after validating the factors.
    ///
    /// # Errors
    /// `RandomError::InvalidModulus` when the factors fail
    /// [`BbsParams::validate`].
    pub fn with_primes(p: u64, q: u64, seed: W, extraction: Extraction) -> Result<Self, RandomError> {
        Self::with_params(seed, BbsParams { p, q, extraction })
    }

    /// Constructs from a parameter set after validating it.
    ///
    /// # Errors
    /// `RandomError::InvalidModulus` when the factors fail
    /// [`BbsParams::validate`].
    pub fn with_params(seed: W, params: BbsParams) -> Result<Self, RandomError> {
        params.validate()?;
        Ok(Self::build(seed, params))
    }

    fn build(seed: W, params: BbsParams) -> Self {
        let mut bbs = Self {
            state: BigInt128::ZERO,
            modulus: params.modulus(),
            params,
            _word: PhantomData,
        };
        bbs.load(seed);
        bbs
    }

    /// Active parameters.
    pub fn params(&self) -> &BbsParams {
        &self.params
    }

    /// Current residue.
    pub fn state(&self) -> BigInt128 {
        self.state
    }

    fn load(&mut self, seed: W) {
        let seed = resolve_seed(seed).as_u64();
        let step = BigInt128::from(PERTURBATION);
        let mut x = BigInt128::from(seed).rem(self.modulus);
        let mut perturbations = 0u32;
        while x.gcd(self.modulus) != BigInt128::ONE {
            x = x.add_mod(step, self.modulus);
            perturbations += 1;
        }
        if perturbations > 0 {
            tracing::debug!(
                seed,
                perturbations,
                "seed shared a factor with the modulus and was perturbed"
            );
        }
        self.state = x;
    }

    #[inline]
    fn square(&mut self) -> u64 {
        let mut x = self.state.square_mod(self.modulus);
        if x <= BigInt128::ONE {
            x = x.add_mod(BigInt128::from(PERTURBATION), self.modulus);
        }
        self.state = x;
        x.low_u64()
    }
}

impl<W: Word> Generator for BlumBlumShub<W> {
    type Output = W;
    const NAME: &'static str = "bbs";

    fn from_seed(seed: W) -> Self {
        Self::build(seed, BbsParams::default())
    }

    fn generate(&mut self) -> W {
        let mut out = W::zero();
        match self.params.extraction {
            Extraction::Byte => {
                for _ in 0..W::BITS / 8 {
                    out = (out << 8) | W::truncate(self.square() & 0xFF);
                }
            }
            Extraction::Bit => {
                for _ in 0..W::BITS {
                    out = (out << 1) | W::truncate(self.square() & 1);
                }
            }
        }
        out
    }

    fn reseed(&mut self, seed: W) {
        self.load(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modulus() {
        assert_eq!(
            BbsParams::default().modulus().value(),
            340_282_366_920_938_455_236_126_750_557_308_239_293
        );
        assert!(BbsParams::default().validate().is_ok());
    }

    #[test]
    fn test_golden_sequence_byte_32() {
        let mut g = BlumBlumShub32::from_seed(1234);
        let out: Vec<u32> = (0..3).map(|_| g.generate()).collect();
        assert_eq!(out, vec![1141899313, 812338367, 3289941682]);
    }

    #[test]
    fn test_golden_sequence_byte_64() {
        let mut g = BlumBlumShub64::from_seed(1234);
        let out: Vec<u64> = (0..3).map(|_| g.generate()).collect();
        assert_eq!(
            out,
            vec![4904420205472206015, 14130191933052373807, 11369592316558970111]
        );
    }

    #[test]
    fn test_golden_sequence_bit_32() {
        let params = BbsParams {
            extraction: Extraction::Bit,
            ..BbsParams::default()
        };
        let mut g = BlumBlumShub32::with_params(1234, params).unwrap();
        let out: Vec<u32> = (0..3).map(|_| g.generate()).collect();
        assert_eq!(out, vec![353352174, 3016188930, 2603685286]);
    }

    #[test]
    fn test_rejects_invalid_factors() {
        // 5 ≡ 1 mod 4
        assert!(BlumBlumShub32::with_primes(5, 7, 1, Extraction::Byte).is_err());
        // 15 is composite
        assert!(BlumBlumShub32::with_primes(15, 7, 1, Extraction::Byte).is_err());
        // p == q
        assert!(BlumBlumShub32::with_primes(7, 7, 1, Extraction::Byte).is_err());
        // 3 divides the perturbation constant
        assert!(BlumBlumShub32::with_primes(3, 7, 1, Extraction::Byte).is_err());
    }

    #[test]
    fn test_non_coprime_seed_is_perturbed() {
        let mut g = BlumBlumShub32::with_primes(499, 547, 499 * 3, Extraction::Bit).unwrap();
        assert_eq!(g.state().gcd(g.params().modulus()), BigInt128::ONE);
        g.generate();
    }

    #[test]
    fn test_state_stays_below_modulus() {
        let mut g = BlumBlumShub64::with_primes(499, 547, 42, Extraction::Byte).unwrap();
        for _ in 0..1_000 {
            g.generate();
            assert!(g.state().value() < 499 * 547);
            assert!(g.state() > BigInt128::ONE);
        }
    }
}
