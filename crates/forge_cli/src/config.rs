//! CLI configuration management
//!
//! Loads settings from a TOML file, `FORGE_*` environment variables and
//! command-line flags, in increasing order of precedence.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::generator::GeneratorKind;

/// Default configuration file, read when present and no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "forge.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator: {0}. Must be one of: xorshift32, xorshift64, lfsr32, lfsr64, mt32, mt64, bbs32, bbs64, naor-reingold")]
    InvalidGenerator(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level` and `log_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[fit]` table
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FitSection {
    /// Solver iteration cap
    pub max_iterations: usize,
    /// Residual-norm tolerance
    pub tolerance: f64,
}

impl Default for FitSection {
    fn default() -> Self {
        let defaults = forge_fitting::FitConfig::default();
        Self {
            max_iterations: defaults.max_iterations,
            tolerance: defaults.tolerance,
        }
    }
}

impl FitSection {
    /// Solver configuration with these overrides applied
    pub fn to_fit_config(&self) -> forge_fitting::FitConfig {
        forge_fitting::FitConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Generator algorithm
    pub generator: GeneratorKind,
    /// Seed; zero selects a clock seed
    pub seed: u64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Fitting settings
    pub fit: FitSection,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::default(),
            seed: 0,
            log_level: LogLevel::default(),
            fit: FitSection::default(),
        }
    }
}

// Read by `ForgeConfig::apply_env`.
const ENV_GENERATOR: &str = "FORGE_GENERATOR";
const ENV_SEED: &str = "FORGE_SEED";
const ENV_LOG_LEVEL: &str = "FORGE_LOG_LEVEL";
const ENV_FIT_MAX_ITERATIONS: &str = "FORGE_FIT_MAX_ITERATIONS";
const ENV_FIT_TOLERANCE: &str = "FORGE_FIT_TOLERANCE";

impl ForgeConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ForgeConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `FORGE_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables looked up through `lookup`
    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(generator) = lookup(ENV_GENERATOR) {
            self.generator = GeneratorKind::from_str(&generator)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_value("seed", &seed)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(iters) = lookup(ENV_FIT_MAX_ITERATIONS) {
            self.fit.max_iterations = parse_value("fit.max_iterations", &iters)?;
        }
        if let Some(tol) = lookup(ENV_FIT_TOLERANCE) {
            self.fit.tolerance = parse_value("fit.tolerance", &tol)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fit.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                key: "fit.max_iterations",
                value: "0".to_string(),
            });
        }
        if !(self.fit.tolerance.is_finite() && self.fit.tolerance > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "fit.tolerance",
                value: self.fit.tolerance.to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(generator) = &cli.generator {
            self.generator = GeneratorKind::from_str(generator)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Generator override
    pub generator: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// `--verbose` (debug logging unless a level is given)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `forge.toml` when present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ForgeConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ForgeConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            ForgeConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => ForgeConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ForgeConfig::default();
        assert_eq!(config.generator, GeneratorKind::Mt64);
        assert_eq!(config.seed, 0);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.fit.max_iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let config = ForgeConfig::from_toml(
            r#"
            generator = "xorshift32"
            seed = 1234
            log_level = "debug"

            [fit]
            max_iterations = 50
            tolerance = 1e-8
        "#,
        )
        .unwrap();
        assert_eq!(config.generator, GeneratorKind::XorShift32);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.fit.max_iterations, 50);
        assert_eq!(config.fit.to_fit_config().tolerance, 1e-8);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = ForgeConfig::from_toml("seed = 9").unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.generator, GeneratorKind::Mt64);
        assert_eq!(config.fit, FitSection::default());
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(ForgeConfig::from_toml("generator = \"dice\"").is_err());
        assert!(ForgeConfig::from_toml("[fit]\nmax_iterations = 0").is_err());
        assert!(ForgeConfig::from_toml("[fit]\ntolerance = -1.0").is_err());
    }

    #[test]
    fn test_env_overlay() {
        let vars: HashMap<&str, &str> = [
            ("FORGE_GENERATOR", "bbs64"),
            ("FORGE_SEED", "77"),
            ("FORGE_FIT_TOLERANCE", "1e-6"),
        ]
        .into_iter()
        .collect();
        let mut config = ForgeConfig::default();
        config
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.generator, GeneratorKind::Bbs64);
        assert_eq!(config.seed, 77);
        assert_eq!(config.fit.tolerance, 1e-6);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_env_overlay_rejects_garbage() {
        let mut config = ForgeConfig::default();
        let err = config
            .apply_vars(|key| (key == "FORGE_SEED").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("seed"));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = ForgeConfig::default();
        let cli = CliArgs {
            generator: Some("lfsr32".to_string()),
            seed: Some(5),
            log_level: None,
            verbose: true,
            config_file: None,
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.generator, GeneratorKind::Lfsr32);
        assert_eq!(config.seed, 5);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_explicit_level_beats_verbose() {
        let mut config = ForgeConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidGenerator("dice".to_string());
        assert!(err.to_string().contains("Invalid generator"));
        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().contains("Invalid log level"));
    }
}
