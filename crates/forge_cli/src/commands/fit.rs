//! Fit command implementation
//!
//! Reads `x,y` rows from CSV and prints the fit report as JSON.

use std::path::Path;

use forge_fitting::{
    fit_cauchy, fit_exponential, fit_gaussian, fit_maxwell, fit_weibull, FitConfig, FitReport,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ForgeConfig;
use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

/// Run the fit command
pub fn run(config: &ForgeConfig, family: &str, input: &str) -> Result<()> {
    if !Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }
    let (x, y) = read_points(csv::Reader::from_path(input)?)?;
    info!(family, input, points = x.len(), "fitting");

    let json = fit_to_json(family, &x, &y, &config.fit.to_fit_config())?;
    println!("{}", json);
    Ok(())
}

/// Collects the `x` and `y` columns of a headed CSV.
pub fn read_points<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for row in reader.deserialize() {
        let Point { x: xi, y: yi } = row?;
        x.push(xi);
        y.push(yi);
    }
    Ok((x, y))
}

/// Fits `family` and renders the report as pretty JSON.
pub fn fit_to_json(family: &str, x: &[f64], y: &[f64], config: &FitConfig) -> Result<String> {
    match family.to_lowercase().as_str() {
        "gaussian" | "normal" => render(fit_gaussian(x, y, config)?),
        "cauchy" => render(fit_cauchy(x, y, config)?),
        "maxwell" => render(fit_maxwell(x, y, config)?),
        "exponential" => render(fit_exponential(x, y, config)?),
        "weibull" => render(fit_weibull(x, y, config)?),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown family: {}. Supported: gaussian, cauchy, maxwell, exponential, weibull",
            other
        ))),
    }
}

fn render<D>(report: FitReport<D>) -> Result<String>
where
    FitReport<D>: Serialize,
{
    if !report.converged {
        tracing::warn!(family = report.family, iterations = report.iterations, "fit did not converge");
    }
    Ok(serde_json::to_string_pretty(&report)?)
}
