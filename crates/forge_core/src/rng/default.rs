//! Process-wide default generator.
//!
//! A convenience instance for callers that do not want to thread a
//! generator through their code. It is never created implicitly by the
//! library: the first call to [`with_default_generator`] initialises it
//! from the clock unless [`init_default_generator`] ran first.
//!
//! Access is serialised by a mutex, so the single-writer rule holds even
//! when several threads use it.

use crate::generators::MersenneTwister64;
use crate::rng::Random;
use crate::traits::Generator;
use crate::types::RandomError;
use std::sync::{Mutex, OnceLock};

/// Generator type backing the default instance.
pub type DefaultGenerator = Random<MersenneTwister64>;

static DEFAULT: OnceLock<Mutex<DefaultGenerator>> = OnceLock::new();

/// Initialises the default generator from `seed` (zero selects a clock seed).
///
/// # Errors
/// `RandomError::DefaultAlreadyInitialised` if the default generator was
/// already initialised, explicitly or by an earlier
/// [`with_default_generator`] call.
pub fn init_default_generator(seed: u64) -> Result<(), RandomError> {
    let mut created = false;
    DEFAULT.get_or_init(|| {
        created = true;
        Mutex::new(Random::new(MersenneTwister64::from_seed(seed)))
    });
    if created {
        tracing::debug!(seed, "default generator initialised");
        Ok(())
    } else {
        Err(RandomError::DefaultAlreadyInitialised)
    }
}

/// Runs `f` with exclusive access to the default generator.
///
/// # Examples
/// ```
/// use forge_core::rng::with_default_generator;
///
/// let u = with_default_generator(|rng| rng.next_unit());
/// assert!((0.0..1.0).contains(&u));
/// ```
pub fn with_default_generator<R>(f: impl FnOnce(&mut DefaultGenerator) -> R) -> R {
    let cell = DEFAULT.get_or_init(|| {
        tracing::debug!("default generator initialised from clock seed");
        Mutex::new(Random::new(MersenneTwister64::from_seed(0)))
    });
    // A panic inside another caller's closure leaves the generator state
    // valid, so a poisoned lock is recovered rather than propagated.
    let mut guard = cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}
