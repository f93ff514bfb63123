//! Gibbs (Boltzmann) distribution over a finite set of states.

use crate::error::{require_finite, DistributionError};
use crate::table::ProbabilityTable;
use crate::traits::Discrete;

/// Distribution over integer states with `P(x) ∝ exp(-beta · E(x))`.
///
/// # Examples
/// ```
/// use forge_distributions::discrete::Gibbs;
/// use forge_distributions::Discrete;
///
/// // Two-level system at beta = ln 2: the ground state is twice as likely.
/// let g = Gibbs::new(&[0, 1], &[0.0, 1.0], 2.0_f64.ln()).unwrap();
/// assert!((g.pmf(0) - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gibbs {
    beta: f64,
    table: ProbabilityTable,
}

impl Gibbs {
    /// Constructs from states, their energies and inverse temperature `beta`.
    ///
    /// States need not be sorted. Boltzmann factors are shifted by the
    /// largest exponent before exponentiation, so large energies do not
    /// underflow the whole table.
    ///
    /// # Errors
    /// - `DistributionError::InvalidParameter` for a non-finite `beta`
    /// - `DistributionError::InvalidSupport` for empty or mismatched input,
    ///   duplicate states, or non-finite energies
    pub fn new(states: &[i64], energies: &[f64], beta: f64) -> Result<Self, DistributionError> {
        let beta = require_finite("beta", beta)?;
        if states.len() != energies.len() {
            return Err(DistributionError::InvalidSupport(format!(
                "{} states but {} energies",
                states.len(),
                energies.len()
            )));
        }
        if let Some(e) = energies.iter().find(|e| !e.is_finite()) {
            return Err(DistributionError::InvalidSupport(format!(
                "energy {} is not finite",
                e
            )));
        }

        let exponents: Vec<f64> = energies.iter().map(|e| -beta * e).collect();
        let shift = exponents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights = exponents.iter().map(|x| (x - shift).exp()).collect();
        let table = ProbabilityTable::from_weights(states.to_vec(), weights)?;
        Ok(Self { beta, table })
    }

    /// Inverse temperature.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Sorted states.
    pub fn states(&self) -> &[i64] {
        self.table.outcomes()
    }

    /// Table lookup for a uniform `[0, 1)` draw.
    pub fn next(&self, r: f64) -> i64 {
        self.table.sample(r)
    }
}

impl Discrete for Gibbs {
    fn pmf(&self, k: i64) -> f64 {
        self.table.pmf(k)
    }

    fn cdf(&self, k: i64) -> f64 {
        self.table.cdf(k)
    }

    fn expectation(&self) -> f64 {
        self.table.expectation()
    }

    fn variance(&self) -> f64 {
        self.table.variance()
    }

    fn min_value(&self) -> i64 {
        self.table.min_value()
    }

    fn max_value(&self) -> i64 {
        self.table.max_value()
    }

    fn sample_with(&self, unit: &mut dyn FnMut() -> f64) -> i64 {
        self.next(unit())
    }
}
