//! CLI configuration management.
//!
//! Settings are resolved in three layers, later layers winning:
//! 1. Defaults, optionally replaced by a TOML file (`pi_estimator.toml`)
//! 2. `PI_*` environment variables
//! 3. Command-line flags

use clap::ValueEnum;
use pi_engine::mc::{ExecutionMode, TrialConfig, MAX_BATCH_SIZE};
use pi_engine::{EstimationMethod, SimulationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest histogram supported by the text renderer.
pub const MAX_BINS: usize = 200;

/// Output format for results
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table plus text histogram
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Number of independent estimates. Signed so negative input can be
    /// reported as an invalid argument.
    #[serde(default = "default_trials")]
    pub trials: i64,

    /// Seed; unset draws one from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Estimation strategy
    #[serde(default)]
    pub method: EstimationMethod,

    /// Samples behind each estimate
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Run trials on the Rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Confidence level for the interval and percentile band
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_trials() -> i64 {
    100
}

fn default_batch_size() -> usize {
    pi_engine::mc::DEFAULT_BATCH_SIZE
}

fn default_bins() -> usize {
    pi_report::DEFAULT_BINS
}

fn default_confidence() -> f64 {
    pi_report::DEFAULT_CONFIDENCE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
            method: EstimationMethod::default(),
            batch_size: default_batch_size(),
            parallel: false,
            bins: default_bins(),
            confidence: default_confidence(),
            log_level: default_log_level(),
            format: OutputFormat::default(),
        }
    }
}

/// Which settings a command reads, and therefore which must be valid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// Single simulation: every setting
    Run,
    /// Trial counts come from the command line; `trials` and `bins` are unused
    Sweep,
    /// No simulation; only logging settings apply
    Listing,
}

/// Command-line values that override the configuration
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--trials`
    pub trials: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--method`
    pub method: Option<EstimationMethod>,
    /// `--batch-size`
    pub batch_size: Option<usize>,
    /// `--parallel`
    pub parallel: bool,
    /// `--bins`
    pub bins: Option<usize>,
    /// `--format`
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return defaults when the file does not exist
    pub fn load_if_exists(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PI_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trials) = lookup("PI_TRIALS") {
            self.trials = parse_env("PI_TRIALS", &trials)?;
        }

        if let Some(seed) = lookup("PI_SEED") {
            self.seed = Some(parse_env("PI_SEED", &seed)?);
        }

        if let Some(method) = lookup("PI_METHOD") {
            self.method = parse_env("PI_METHOD", &method)?;
        }

        if let Some(batch_size) = lookup("PI_BATCH_SIZE") {
            self.batch_size = parse_env("PI_BATCH_SIZE", &batch_size)?;
        }

        if let Some(parallel) = lookup("PI_PARALLEL") {
            self.parallel = match parallel.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Env {
                        key: "PI_PARALLEL",
                        value: parallel,
                    })
                }
            };
        }

        if let Some(bins) = lookup("PI_BINS") {
            self.bins = parse_env("PI_BINS", &bins)?;
        }

        if let Some(confidence) = lookup("PI_CONFIDENCE") {
            self.confidence = parse_env("PI_CONFIDENCE", &confidence)?;
        }

        if let Some(log_level) = lookup("PI_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("PI_FORMAT") {
            self.format = OutputFormat::from_str(&format, true).map_err(|_| ConfigError::Env {
                key: "PI_FORMAT",
                value: format.clone(),
            })?;
        }

        Ok(self)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(trials) = overrides.trials {
            self.trials = i64::try_from(trials).unwrap_or(i64::MAX);
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(method) = overrides.method {
            self.method = method;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        if let Some(bins) = overrides.bins {
            self.bins = bins;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// Validate every setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(Usage::Run)
    }

    /// Validate the settings read by `usage`
    pub fn validate_for(&self, usage: Usage) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if usage == Usage::Run {
            if let Err(e) = TrialConfig::trials_from_i64(self.trials) {
                errors.push(e.to_string());
            }

            if self.bins == 0 || self.bins > MAX_BINS {
                errors.push(format!("bins {} is not in range [1, {}]", self.bins, MAX_BINS));
            }
        }

        if usage != Usage::Listing {
            if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
                errors.push(format!(
                    "batch_size {} is not in range [1, {}]",
                    self.batch_size, MAX_BATCH_SIZE
                ));
            }

            if !(self.confidence > 0.0 && self.confidence < 1.0) {
                errors.push(format!(
                    "confidence {} must be in the open interval (0, 1)",
                    self.confidence
                ));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Execution mode selected by `parallel`
    pub fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Builds the engine configuration for `trials` estimates
    pub fn trial_config_for(&self, trials: usize) -> Result<TrialConfig, SimulationError> {
        TrialConfig::builder()
            .trials(trials)
            .batch_size(self.batch_size)
            .method(self.method)
            .mode(self.mode())
            .maybe_seed(self.seed)
            .build()
    }

    /// Builds the engine configuration for the configured trial count
    pub fn trial_config(&self) -> Result<TrialConfig, SimulationError> {
        let trials = TrialConfig::trials_from_i64(self.trials)?;
        self.trial_config_for(trials)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        key,
        value: value.to_string(),
    })
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Unparsable environment variable
    Env {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Env { key, value } => write!(f, "Invalid value for {}: '{}'", key, value),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.trials, 100);
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.bins, 24);
        assert_eq!(config.method, EstimationMethod::Integration);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trials = 10000\nmethod = \"counting\"\nseed = 42").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.method, EstimationMethod::Counting);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bins, 24);
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trails = 10").unwrap();

        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_if_exists_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_if_exists(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_overrides_from(lookup(&[
                ("PI_TRIALS", "1000"),
                ("PI_SEED", "7"),
                ("PI_METHOD", "Counting"),
                ("PI_PARALLEL", "true"),
                ("PI_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.trials, 1000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.method, EstimationMethod::Counting);
        assert_eq!(config.mode(), ExecutionMode::Parallel);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_override_invalid_value() {
        let err = CliConfig::default()
            .with_overrides_from(lookup(&[("PI_TRIALS", "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Env {
                key: "PI_TRIALS",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_env_negative_trials_fails_validation() {
        let config = CliConfig::default()
            .with_overrides_from(lookup(&[("PI_TRIALS", "-5")]))
            .unwrap();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("'trials'")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let overrides = Overrides {
            trials: Some(5_000),
            bins: Some(10),
            parallel: true,
            ..Overrides::default()
        };
        let config = CliConfig {
            seed: Some(1),
            ..CliConfig::default()
        }
        .with_overrides(&overrides);

        assert_eq!(config.trials, 5_000);
        assert_eq!(config.bins, 10);
        assert!(config.parallel);
        // Unset override keeps the configured seed
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = CliConfig {
            trials: 0,
            batch_size: 0,
            bins: 0,
            confidence: 1.0,
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unused_settings_not_validated() {
        let config = CliConfig::default()
            .with_overrides_from(lookup(&[("PI_TRIALS", "-5"), ("PI_BINS", "0")]))
            .unwrap();

        assert!(config.validate_for(Usage::Run).is_err());
        assert!(config.validate_for(Usage::Sweep).is_ok());
        assert!(config.validate_for(Usage::Listing).is_ok());
    }

    #[test]
    fn test_listing_still_checks_log_level() {
        let config = CliConfig {
            trials: 0,
            batch_size: 0,
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };

        match config.validate_for(Usage::Listing) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("log_level"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        match config.validate_for(Usage::Sweep) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_trial_config() {
        let config = CliConfig {
            trials: 2_000,
            seed: Some(3),
            parallel: true,
            ..CliConfig::default()
        };
        let trial = config.trial_config().unwrap();

        assert_eq!(trial.trials(), 2_000);
        assert_eq!(trial.seed(), Some(3));
        assert_eq!(trial.mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
