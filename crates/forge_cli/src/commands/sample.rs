//! Sample command implementation
//!
//! Draws from a named distribution with `--param key=value` arguments.

use std::collections::HashMap;
use std::io::{self, BufWriter, Write};

use forge_core::rng::Random;
use forge_core::traits::Generator;
use forge_distributions::continuous::{Cauchy, Exponential, Gaussian, Maxwell, Weibull};
use forge_distributions::discrete::{
    Bernoulli, Binomial, Geometric, Hypergeometric, NegHypergeometric, Poisson,
};
use forge_distributions::{Continuous, Discrete};
use tracing::info;

use crate::config::ForgeConfig;
use crate::generator::{dispatch, GeneratorTask};
use crate::{CliError, Result};

/// Distribution names accepted by `forge sample`.
pub const SUPPORTED: &[&str] = &[
    "gaussian",
    "exponential",
    "cauchy",
    "weibull",
    "maxwell",
    "bernoulli",
    "binomial",
    "geometric",
    "poisson",
    "hypergeometric",
    "neg-hypergeometric",
];

/// A distribution built from command-line parameters.
pub enum Sampler {
    Continuous(Box<dyn Continuous>),
    Discrete(Box<dyn Discrete>),
}

/// Run the sample command
pub fn run(config: &ForgeConfig, distribution: &str, params: &[String], count: usize) -> Result<()> {
    let params = parse_params(params)?;
    let sampler = build_sampler(distribution, &params)?;
    info!(distribution, ?params, count, generator = %config.generator, "sampling");

    let out = BufWriter::new(io::stdout().lock());
    let task = SampleTask {
        sampler: &sampler,
        count,
        out,
    };
    match dispatch(config.generator, config.seed, task) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(Into::into),
    }
}

/// Parses `key=value` pairs.
pub fn parse_params(raw: &[String]) -> Result<HashMap<String, f64>> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CliError::InvalidArgument(format!("expected key=value, got '{}'", pair))
            })?;
            let value: f64 = value.trim().parse().map_err(|_| {
                CliError::InvalidArgument(format!("parameter {} is not a number: '{}'", key, value))
            })?;
            Ok((key.trim().to_lowercase(), value))
        })
        .collect()
}

/// Builds the named distribution, taking defaults for omitted parameters.
///
/// Integer parameters (`n`, `total`, `successes`, `draws`, `failures`) must
/// be non-negative whole numbers.
pub fn build_sampler(name: &str, params: &HashMap<String, f64>) -> Result<Sampler> {
    let real = |key: &str, default: Option<f64>| -> Result<f64> {
        params
            .get(key)
            .copied()
            .or(default)
            .ok_or_else(|| CliError::InvalidArgument(format!("{} requires --param {}=<value>", name, key)))
    };
    let count = |key: &str| -> Result<u64> {
        let v = real(key, None)?;
        if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            Ok(v as u64)
        } else {
            Err(CliError::InvalidArgument(format!(
                "{} must be a non-negative integer, got {}",
                key, v
            )))
        }
    };

    let sampler = match name.to_lowercase().as_str() {
        "gaussian" | "normal" => Sampler::Continuous(Box::new(Gaussian::new(
            real("mu", Some(0.0))?,
            real("sigma", Some(1.0))?,
        )?)),
        "exponential" => Sampler::Continuous(Box::new(Exponential::new(
            real("k", Some(1.0))?,
            real("x0", Some(0.0))?,
        )?)),
        "cauchy" => Sampler::Continuous(Box::new(Cauchy::new(
            real("x0", Some(0.0))?,
            real("gamma", Some(1.0))?,
        )?)),
        "weibull" => Sampler::Continuous(Box::new(Weibull::new(
            real("lambda", Some(1.0))?,
            real("k", Some(1.0))?,
        )?)),
        "maxwell" => Sampler::Continuous(Box::new(Maxwell::new(real("a", Some(1.0))?)?)),
        "bernoulli" => Sampler::Discrete(Box::new(Bernoulli::new(real("p", Some(0.5))?)?)),
        "binomial" => Sampler::Discrete(Box::new(Binomial::new(count("n")?, real("p", None)?)?)),
        "geometric" => Sampler::Discrete(Box::new(Geometric::new(real("p", None)?)?)),
        "poisson" => Sampler::Discrete(Box::new(Poisson::new(real("lambda", None)?)?)),
        "hypergeometric" => Sampler::Discrete(Box::new(Hypergeometric::new(
            count("total")?,
            count("successes")?,
            count("draws")?,
        )?)),
        "neg-hypergeometric" | "negative-hypergeometric" => {
            Sampler::Discrete(Box::new(NegHypergeometric::new(
                count("total")?,
                count("successes")?,
                count("failures")?,
            )?))
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown distribution: {}. Supported: {}",
                other,
                SUPPORTED.join(", ")
            )))
        }
    };
    Ok(sampler)
}

/// Writes `count` samples, one per line.
pub struct SampleTask<'a, W> {
    pub sampler: &'a Sampler,
    pub count: usize,
    pub out: W,
}

impl<W: Write> GeneratorTask for SampleTask<'_, W> {
    type Output = io::Result<()>;

    fn run<G: Generator>(mut self, mut rng: Random<G>) -> io::Result<()> {
        let mut unit = || rng.next_unit();
        for _ in 0..self.count {
            match self.sampler {
                Sampler::Continuous(d) => writeln!(self.out, "{}", d.sample_with(&mut unit))?,
                Sampler::Discrete(d) => writeln!(self.out, "{}", d.sample_with(&mut unit))?,
            }
        }
        self.out.flush()
    }
}
