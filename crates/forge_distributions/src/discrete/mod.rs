//! Discrete distributions.
//!
//! | Distribution | Sampling | Support |
//! |---|---|---|
//! | [`Bernoulli`] | Inversion | `{0, 1}` |
//! | [`Binomial`] | Table lookup | `0..=n` |
//! | [`Geometric`] | Inversion | `1..` |
//! | [`Poisson`] | Rejection (Lorentzian envelope) | `0..` |
//! | [`Hypergeometric`] | Table lookup | `max(0, n+K-N)..=min(n, K)` |
//! | [`NegHypergeometric`] | Table lookup | `0..=K` |
//! | [`Gibbs`] | Table lookup | user-supplied points |

mod bernoulli;
mod binomial;
mod geometric;
mod gibbs;
mod hypergeometric;
mod neg_hypergeometric;
mod poisson;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use geometric::Geometric;
pub use gibbs::Gibbs;
pub use hypergeometric::Hypergeometric;
pub use neg_hypergeometric::NegHypergeometric;
pub use poisson::Poisson;

use crate::error::DistributionError;
use crate::table::MAX_TABLE_LEN;

/// Checks `0 <= p <= 1`.
pub(crate) fn require_probability(name: &'static str, p: f64) -> Result<f64, DistributionError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value: p,
            constraint: "must lie in [0, 1]",
        })
    }
}

/// Checks a tabulated support of `span + 1` outcomes fits in
/// [`MAX_TABLE_LEN`](crate::table::MAX_TABLE_LEN).
pub(crate) fn require_table_span(name: &'static str, span: u64) -> Result<(), DistributionError> {
    if span < MAX_TABLE_LEN as u64 {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value: span as f64,
            constraint: "tabulated support exceeds MAX_TABLE_LEN outcomes",
        })
    }
}
