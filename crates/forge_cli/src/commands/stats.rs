//! Stats command implementation
//!
//! Summarises unit-interval output: moments, extremes, chi-square over equal
//! bins and raw throughput.

use std::time::Instant;

use forge_core::diagnostics::{bin_frequency, chi_square, unit_statistics, UnitStatistics};
use forge_core::rng::Random;
use forge_core::traits::Generator;
use forge_core::types::{RandomError, Word};
use serde::Serialize;
use tracing::info;

use crate::config::ForgeConfig;
use crate::generator::{dispatch, GeneratorTask};
use crate::Result;

/// Report printed by `forge stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub generator: &'static str,
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub bins: usize,
    pub chi_square: f64,
    /// Degrees of freedom of `chi_square` (`bins - 1`)
    pub dof: usize,
    pub words_per_second: f64,
}

impl StatsReport {
    fn render(&self) -> String {
        format!(
            "generator   {}\n\
             count       {}\n\
             mean        {:.6} (expected 0.5)\n\
             variance    {:.6} (expected {:.6})\n\
             min         {:.6}\n\
             max         {:.6}\n\
             chi-square  {:.3} over {} bins ({} dof)\n\
             throughput  {:.3e} words/s",
            self.generator,
            self.count,
            self.mean,
            self.variance,
            1.0 / 12.0,
            self.min,
            self.max,
            self.chi_square,
            self.bins,
            self.dof,
            self.words_per_second
        )
    }
}

/// Run the stats command
pub fn run(config: &ForgeConfig, count: usize, bins: usize, json: bool) -> Result<()> {
    info!(generator = %config.generator, count, bins, "computing statistics");
    let report = dispatch(config.generator, config.seed, StatsTask { count, bins })?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

/// Computes a [`StatsReport`] from a fresh generator.
pub struct StatsTask {
    pub count: usize,
    pub bins: usize,
}

impl GeneratorTask for StatsTask {
    type Output = std::result::Result<StatsReport, RandomError>;

    fn run<G: Generator>(self, mut rng: Random<G>) -> Self::Output {
        let UnitStatistics {
            count,
            mean,
            variance,
            min,
            max,
        } = unit_statistics(&mut rng, self.count);
        let histogram = bin_frequency(&mut rng, self.count, self.bins)?;

        let start = Instant::now();
        let mut sink = 0u64;
        for _ in 0..self.count {
            sink ^= rng.next().as_u64();
        }
        let elapsed = start.elapsed().as_secs_f64();
        std::hint::black_box(sink);

        Ok(StatsReport {
            generator: G::NAME,
            count,
            mean,
            variance,
            min,
            max,
            bins: self.bins,
            chi_square: chi_square(&histogram),
            dof: self.bins.saturating_sub(1),
            words_per_second: if elapsed > 0.0 {
                self.count as f64 / elapsed
            } else {
                f64::INFINITY
            },
        })
    }
}
