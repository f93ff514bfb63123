//! The primitive generator contract.

use crate::types::Word;

/// A deterministic pseudo-random state machine.
///
/// Implementors supply the two primitives, `generate` and `reseed`. Every
/// derived operation (unit reals, ranges, choice, shuffle) lives on
/// [`Random`](crate::rng::Random), which wraps any `Generator`.
///
/// # Seeding
///
/// A seed of zero is the clock sentinel: the implementation substitutes a
/// wall-clock derived seed (see [`resolve_seed`](crate::rng::resolve_seed)).
/// Every nonzero seed is fully deterministic.
///
/// # Examples
/// ```
/// use forge_core::generators::MersenneTwister64;
/// use forge_core::traits::Generator;
///
/// let mut a = MersenneTwister64::from_seed(42);
/// let mut b = MersenneTwister64::from_seed(42);
/// assert_eq!(a.generate(), b.generate());
/// ```
pub trait Generator {
    /// Raw word emitted per step.
    type Output: Word;

    /// Short algorithm name, used in logs and reports.
    const NAME: &'static str;

    /// Constructs a generator from `seed` (zero selects a clock seed).
    fn from_seed(seed: Self::Output) -> Self
    where
        Self: Sized;

    /// Advances the state and returns the next raw word.
    fn generate(&mut self) -> Self::Output;

    /// Resets the state deterministically from `seed` (zero selects a clock seed).
    fn reseed(&mut self, seed: Self::Output);
}
