//! Generator wrapper supplying derived sampling operations.
//!
//! [`Random`] owns any [`Generator`] and layers the operations every
//! algorithm shares on top of its `generate` primitive:
//!
//! - `next`: the raw word
//! - `next_unit`: a real in `[0, 1)`
//! - `next_in_range`: an integer in `[min, max]`
//! - `next_in_crange`: a real in `[min, max)`
//! - `choice` / `choice_weighted`: uniform or weight-proportional selection
//! - `shuffle`: Fisher-Yates permutation
//!
//! `Random` also implements [`rand_core::RngCore`], so any generator here can
//! drive samplers from the `rand` ecosystem.

use crate::traits::Generator;
use crate::types::{RandomError, Word};
use num_traits::Bounded;
use rand_core::{impls, Error, RngCore};

/// Largest integer span `next_in_range` maps without losing precision.
const MAX_EXACT_SPAN: f64 = 9_007_199_254_740_992.0; // 2^53

/// Derived-operation wrapper over a [`Generator`].
///
/// # Examples
/// ```
/// use forge_core::generators::XorShift64;
/// use forge_core::rng::Random;
///
/// let mut rng = Random::<XorShift64>::seeded(7);
/// let deck: Vec<u32> = (1..=52).collect();
/// let card = rng.choice(&deck).unwrap();
/// assert!(deck.contains(card));
/// ```
#[derive(Debug, Clone)]
pub struct Random<G> {
    generator: G,
}

impl<G: Generator> Random<G> {
    /// Wraps an existing generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Constructs the wrapped generator from `seed` (zero selects a clock seed).
    pub fn seeded(seed: G::Output) -> Self {
        Self::new(G::from_seed(seed))
    }

    /// Resets the wrapped generator from `seed` (zero selects a clock seed).
    pub fn reseed(&mut self, seed: G::Output) {
        self.generator.reseed(seed);
    }

    /// Borrow of the wrapped generator.
    pub fn inner(&self) -> &G {
        &self.generator
    }

    /// Mutable borrow of the wrapped generator.
    pub fn inner_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Next raw word.
    #[inline]
    pub fn next(&mut self) -> G::Output {
        self.generator.generate()
    }

    /// Uniform real in `[0, 1)`.
    ///
    /// The raw word is divided by the word maximum; a quotient that rounds
    /// to exactly 1.0 is discarded and redrawn.
    pub fn next_unit(&mut self) -> f64 {
        let max = <G::Output as Bounded>::max_value().as_f64();
        loop {
            let u = self.next().as_f64() / max;
            if u < 1.0 {
                return u;
            }
        }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Computed as `floor(next_unit() * (max - min + 1)) + min`. Spans wider
    /// than 2^53 lose resolution and the result is clamped to `max`.
    ///
    /// # Errors
    /// `RandomError::InvalidRange` when `min > max`.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        let span = (max as i128 - min as i128 + 1) as f64;
        let offset = (self.next_unit() * span).floor() as i128;
        let value = (min as i128 + offset).min(max as i128);
        if span > MAX_EXACT_SPAN {
            tracing::trace!(min, max, "range span exceeds 2^53, resolution reduced");
        }
        Ok(value as i64)
    }

    /// Uniform real in `[min, max)`.
    ///
    /// Draws that land exactly on `max` after scaling are rejected and
    /// redrawn.
    ///
    /// # Errors
    /// `RandomError::InvalidRange` unless `min < max` and the span
    /// `max - min` is finite.
    pub fn next_in_crange(&mut self, min: f64, max: f64) -> Result<f64, RandomError> {
        let span = max - min;
        if min.is_nan() || max.is_nan() || min >= max || !span.is_finite() {
            return Err(RandomError::InvalidRange { min, max });
        }
        loop {
            let value = min + self.next_unit() * span;
            if value < max {
                return Ok(value);
            }
        }
    }

    /// Uniformly selected element of `items`.
    ///
    /// # Errors
    /// `RandomError::EmptySequence` when `items` is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        if items.is_empty() {
            return Err(RandomError::EmptySequence);
        }
        Ok(&items[self.index_below(items.len())])
    }

    /// Element of `items` selected with probability proportional to its weight.
    ///
    /// Builds the cumulative weights, draws `next_unit() * total` and picks
    /// the first element whose cumulative weight exceeds the draw (an exact
    /// tie selects the next element). Zero-weight elements are never chosen.
    ///
    /// # Errors
    /// - `RandomError::EmptySequence` when `items` is empty
    /// - `RandomError::LengthMismatch` when lengths differ
    /// - `RandomError::InvalidWeights` for negative, non-finite or all-zero weights
    pub fn choice_weighted<'a, T>(
        &mut self,
        items: &'a [T],
        weights: &[f64],
    ) -> Result<&'a T, RandomError> {
        if items.is_empty() {
            return Err(RandomError::EmptySequence);
        }
        if items.len() != weights.len() {
            return Err(RandomError::LengthMismatch {
                items: items.len(),
                weights: weights.len(),
            });
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(RandomError::InvalidWeights(format!(
                    "weight {} at index {} is not a finite non-negative number",
                    w, i
                )));
            }
            total += w;
            cumulative.push(total);
        }
        if total <= 0.0 || !total.is_finite() {
            return Err(RandomError::InvalidWeights(format!(
                "total weight {} must be positive and finite",
                total
            )));
        }

        let draw = self.next_unit() * total;
        let index = cumulative.partition_point(|&c| c <= draw);
        // Rounding in the running sum can leave the draw at the last bound;
        // fall back to the last element carrying weight.
        let index = if index < items.len() {
            index
        } else {
            weights.iter().rposition(|&w| w > 0.0).unwrap_or(items.len() - 1)
        };
        Ok(&items[index])
    }

    /// Shuffles `items` in place (Fisher-Yates).
    ///
    /// Empty and single-element slices are left untouched.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Uniform index in `[0, len)`; `len` must be nonzero.
    #[inline]
    fn index_below(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

impl<G: Generator> RngCore for Random<G> {
    fn next_u32(&mut self) -> u32 {
        let word = self.next().as_u64();
        if G::Output::BITS >= 64 {
            (word >> 32) as u32
        } else {
            word as u32
        }
    }

    fn next_u64(&mut self) -> u64 {
        if G::Output::BITS >= 64 {
            self.next().as_u64()
        } else {
            let high = self.next().as_u64();
            let low = self.next().as_u64();
            (high << 32) | low
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MersenneTwister32, XorShift32, XorShift64};
    use proptest::prelude::*;

    #[test]
    fn test_next_unit_half_open() {
        let mut rng = Random::<XorShift32>::seeded(99);
        for _ in 0..100_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    /// Replays a fixed word sequence.
    struct Scripted {
        words: Vec<u32>,
        pos: usize,
    }

    impl Generator for Scripted {
        type Output = u32;
        const NAME: &'static str = "scripted";

        fn from_seed(seed: u32) -> Self {
            Self { words: vec![seed], pos: 0 }
        }

        fn generate(&mut self) -> u32 {
            let w = self.words[self.pos % self.words.len()];
            self.pos += 1;
            w
        }

        fn reseed(&mut self, seed: u32) {
            *self = Self::from_seed(seed);
        }
    }

    #[test]
    fn test_next_unit_redraws_word_maximum() {
        let mut rng = Random::new(Scripted {
            words: vec![u32::MAX, u32::MAX / 2 + 1],
            pos: 0,
        });
        assert_eq!(rng.next_unit(), (u32::MAX / 2 + 1) as f64 / u32::MAX as f64);
        assert_eq!(rng.inner().pos, 2);
    }

    #[test]
    fn test_next_in_range_single_point() {
        let mut rng = Random::<XorShift64>::seeded(5);
        for _ in 0..100 {
            assert_eq!(rng.next_in_range(-3, -3).unwrap(), -3);
        }
    }

    #[test]
    fn test_next_in_range_inverted_is_error() {
        let mut rng = Random::<XorShift64>::seeded(5);
        assert_eq!(
            rng.next_in_range(4, 3),
            Err(RandomError::InvalidRange { min: 4.0, max: 3.0 })
        );
    }

    #[test]
    fn test_next_in_range_full_i64_span() {
        let mut rng = Random::<XorShift64>::seeded(11);
        for _ in 0..1_000 {
            rng.next_in_range(i64::MIN, i64::MAX).unwrap();
        }
    }

    #[test]
    fn test_next_in_range_hits_both_ends() {
        let mut rng = Random::<MersenneTwister32>::seeded(2024);
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let v = rng.next_in_range(1, 6).unwrap();
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_next_in_crange_rejects_degenerate() {
        let mut rng = Random::<XorShift32>::seeded(1);
        assert!(rng.next_in_crange(1.0, 1.0).is_err());
        assert!(rng.next_in_crange(0.0, f64::INFINITY).is_err());
        assert!(rng.next_in_crange(f64::NAN, 1.0).is_err());
        assert!(rng.next_in_crange(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_choice_empty() {
        let mut rng = Random::<XorShift32>::seeded(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choice(&empty), Err(RandomError::EmptySequence));
    }

    #[test]
    fn test_choice_weighted_errors() {
        let mut rng = Random::<XorShift32>::seeded(1);
        let items = [1, 2, 3];
        assert_eq!(
            rng.choice_weighted(&items, &[1.0, 2.0]),
            Err(RandomError::LengthMismatch { items: 3, weights: 2 })
        );
        assert!(matches!(
            rng.choice_weighted(&items, &[1.0, -2.0, 1.0]),
            Err(RandomError::InvalidWeights(_))
        ));
        assert!(matches!(
            rng.choice_weighted(&items, &[0.0, 0.0, 0.0]),
            Err(RandomError::InvalidWeights(_))
        ));
        assert!(matches!(
            rng.choice_weighted(&items, &[1.0, f64::NAN, 0.0]),
            Err(RandomError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_choice_weighted_skips_zero_weights() {
        let mut rng = Random::<MersenneTwister32>::seeded(17);
        let items = ['a', 'b', 'c', 'd'];
        for _ in 0..5_000 {
            let c = *rng.choice_weighted(&items, &[0.0, 1.0, 0.0, 3.0]).unwrap();
            assert!(c == 'b' || c == 'd');
        }
    }

    #[test]
    fn test_choice_weighted_proportions() {
        let mut rng = Random::<MersenneTwister32>::seeded(4357);
        let items = [0usize, 1, 2];
        let weights = [1.0, 2.0, 7.0];
        let mut counts = [0usize; 3];
        let n = 100_000;
        for _ in 0..n {
            counts[*rng.choice_weighted(&items, &weights).unwrap()] += 1;
        }
        for (count, w) in counts.iter().zip(weights) {
            let observed = *count as f64 / n as f64;
            assert!((observed - w / 10.0).abs() < 0.01, "{} vs {}", observed, w / 10.0);
        }
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = Random::<XorShift32>::seeded(1);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        let mut one = vec![42];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = Random::<XorShift32>::seeded(1234);
        let first: Vec<u32> = (0..5).map(|_| rng.next()).collect();
        rng.reseed(1234);
        let second: Vec<u32> = (0..5).map(|_| rng.next()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rng_core_composes_32_bit_words() {
        let mut a = Random::<XorShift32>::seeded(1234);
        let mut b = Random::<XorShift32>::seeded(1234);
        let high = b.next() as u64;
        let low = b.next() as u64;
        assert_eq!(a.next_u64(), (high << 32) | low);
    }

    #[test]
    fn test_rng_core_high_half_of_64_bit_words() {
        let mut a = Random::<XorShift64>::seeded(1234);
        let mut b = Random::<XorShift64>::seeded(1234);
        assert_eq!(a.next_u32(), (b.next() >> 32) as u32);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_next_in_range_within_bounds(seed in 1u64.., a in any::<i32>(), b in any::<i32>()) {
            let (min, max) = if a <= b { (a as i64, b as i64) } else { (b as i64, a as i64) };
            let mut rng = Random::<XorShift64>::seeded(seed);
            for _ in 0..100 {
                let v = rng.next_in_range(min, max).unwrap();
                prop_assert!(v >= min && v <= max);
            }
        }

        #[test]
        fn prop_next_in_crange_half_open(seed in 1u32.., min in -1e6f64..1e6, width in 1e-3f64..1e6) {
            let max = min + width;
            let mut rng = Random::<XorShift32>::seeded(seed);
            for _ in 0..100 {
                let v = rng.next_in_crange(min, max).unwrap();
                prop_assert!(v >= min && v < max);
            }
        }

        #[test]
        fn prop_shuffle_is_permutation(seed in 1u64.., len in 0usize..64) {
            let mut rng = Random::<XorShift64>::seeded(seed);
            let mut items: Vec<usize> = (0..len).collect();
            rng.shuffle(&mut items);
            let mut sorted = items.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        }
    }
}
