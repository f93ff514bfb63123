//! Naor-Reingold style pseudo-random function used as a generator.
//!
//! Over a public prime field with generator `g` and exponents `a[0..=32]`,
//! a table `table[i] = g^a[i] mod p` is precomputed. The output for a 32-bit
//! state `x` is
//!
//! ```text
//! table[0] · Π_{bit i of x set} table[i+1]  mod p
//! ```
//!
//! and the output also becomes the next state.
//!
//! Because the state map is a fixed function on 2^32 points, every orbit
//! falls into a cycle after a few thousand draws at most (seed 1234 enters
//! a cycle of length 970). Use it where its algebraic structure matters, not
//! for long uniform streams.

use crate::math::modular::{is_prime, mod_pow, mul_mod_u64};
use crate::rng::resolve_seed;
use crate::traits::Generator;
use crate::types::RandomError;

/// Number of exponents: one base plus one per state bit.
pub const EXPONENT_COUNT: usize = 33;

/// Public group parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaorReingoldParams {
    /// Prime modulus, below 2^32 so outputs fit a `u32`.
    pub modulus: u64,
    /// Group generator.
    pub generator: u64,
    /// Exponents `a[0..=32]`.
    pub exponents: [u64; EXPONENT_COUNT],
}

impl Default for NaorReingoldParams {
    fn default() -> Self {
        Self {
            modulus: 4_279_969_613,
            generator: 9_999_918,
            exponents: [
                650_051, 3_948_705, 3_142_325, 4_036_110, 1_141_941, 5_739_231, 5_725_758,
                8_299_330, 1_776_388, 1_423_550, 9_260_804, 156_410, 1_190_436, 61_218,
                2_382_500, 1_738_876, 7_978_879, 6_010_478, 310_917, 4_280_253, 24_724,
                7_087_659, 796_099, 8_383_655, 7_638_286, 1_390_415, 7_899_225, 5_628_976,
                1_472_292, 4_284_966, 9_708_041, 4_179_835, 3_635_954,
            ],
        }
    }
}

impl NaorReingoldParams {
    /// Checks the modulus is a prime below 2^32 and the generator lies in
    /// `[2, modulus)`.
    ///
    /// # Errors
    /// `RandomError::InvalidModulus` describing the violation.
    pub fn validate(&self) -> Result<(), RandomError> {
        if self.modulus > u32::MAX as u64 || !is_prime(self.modulus) {
            return Err(RandomError::InvalidModulus(format!(
                "modulus {} must be a prime below 2^32",
                self.modulus
            )));
        }
        if self.generator < 2 || self.generator >= self.modulus {
            return Err(RandomError::InvalidModulus(format!(
                "generator {} must lie in [2, {})",
                self.generator, self.modulus
            )));
        }
        Ok(())
    }
}

/// Naor-Reingold generator over 32-bit states.
///
/// # Examples
/// ```
/// use forge_core::generators::NaorReingold;
/// use forge_core::traits::Generator;
///
/// let mut nr = NaorReingold::from_seed(1234);
/// assert_eq!(nr.generate(), 3020541202);
/// ```
#[derive(Debug, Clone)]
pub struct NaorReingold {
    table: [u64; EXPONENT_COUNT],
    modulus: u64,
    state: u32,
}

impl NaorReingold {
    /// Constructs over custom group parameters.
    ///
    /// # Errors
    /// `RandomError::InvalidModulus` when the parameters fail
    /// [`NaorReingoldParams::validate`].
    pub fn with_params(seed: u32, params: &NaorReingoldParams) -> Result<Self, RandomError> {
        params.validate()?;
        Ok(Self::build(seed, params))
    }

    fn build(seed: u32, params: &NaorReingoldParams) -> Self {
        let mut table = [0u64; EXPONENT_COUNT];
        for (slot, &a) in table.iter_mut().zip(params.exponents.iter()) {
            *slot = mod_pow(params.generator, a, params.modulus);
        }
        Self {
            table,
            modulus: params.modulus,
            state: resolve_seed(seed),
        }
    }

    /// Precomputed powers `g^a[i] mod p`.
    pub fn table(&self) -> &[u64; EXPONENT_COUNT] {
        &self.table
    }

    /// Evaluates the function at `x` without touching the state.
    pub fn evaluate(&self, x: u32) -> u32 {
        let mut acc = self.table[0];
        for bit in 0..32 {
            if (x >> bit) & 1 == 1 {
                acc = mul_mod_u64(acc, self.table[bit + 1], self.modulus);
            }
        }
        // modulus < 2^32
        acc as u32
    }
}

impl Generator for NaorReingold {
    type Output = u32;
    const NAME: &'static str = "naor-reingold";

    fn from_seed(seed: u32) -> Self {
        Self::build(seed, &NaorReingoldParams::default())
    }

    fn generate(&mut self) -> u32 {
        self.state = self.evaluate(self.state);
        self.state
    }

    fn reseed(&mut self, seed: u32) {
        self.state = resolve_seed(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_prefix() {
        let nr = NaorReingold::from_seed(1);
        assert_eq!(&nr.table()[..3], &[2737981618, 1080320388, 1723072060]);
    }

    #[test]
    fn test_golden_sequence() {
        let mut nr = NaorReingold::from_seed(1234);
        let out: Vec<u32> = (0..3).map(|_| nr.generate()).collect();
        assert_eq!(out, vec![3020541202, 1834757241, 3688955562]);
    }

    #[test]
    fn test_default_params_valid() {
        assert!(NaorReingoldParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_composite_modulus() {
        let params = NaorReingoldParams {
            modulus: 4_279_969_615,
            ..NaorReingoldParams::default()
        };
        assert!(NaorReingold::with_params(1, &params).is_err());
    }

    #[test]
    fn test_evaluate_is_pure() {
        let nr = NaorReingold::from_seed(5);
        assert_eq!(nr.evaluate(77), nr.evaluate(77));
        assert_eq!(nr.evaluate(0), nr.table()[0] as u32);
    }
}
