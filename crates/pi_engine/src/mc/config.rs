//! Trial configuration.
//!
//! This module provides [`TrialConfig`] and its builder. A configuration is
//! always passed explicitly to the simulator; there are no default trial
//! counts hidden in function signatures.

use crate::error::SimulationError;

use super::method::EstimationMethod;

/// Maximum number of independent estimates per run.
pub const MAX_TRIALS: usize = 10_000_000;

/// Samples drawn for each individual estimate unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Maximum inner batch size.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// How the outer trial loop is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single generator, trials drawn one after another.
    #[default]
    Sequential,
    /// Trials split into fixed-size chunks, each with its own derived
    /// generator, run on the Rayon pool.
    Parallel,
}

/// Monte Carlo trial configuration.
///
/// Immutable configuration specifying the number of estimates, the strategy
/// and the random seed. Use [`TrialConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pi_engine::mc::{EstimationMethod, TrialConfig};
///
/// let config = TrialConfig::builder()
///     .trials(10_000)
///     .method(EstimationMethod::Counting)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.trials(), 10_000);
/// assert_eq!(config.batch_size(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialConfig {
    /// Number of independent estimates.
    trials: usize,
    /// Samples per estimate.
    batch_size: usize,
    /// Estimation strategy.
    method: EstimationMethod,
    /// Sequential or parallel trial loop.
    mode: ExecutionMode,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl TrialConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> TrialConfigBuilder {
        TrialConfigBuilder::default()
    }

    /// Converts a signed trial count, rejecting zero, negative and
    /// out-of-range values.
    ///
    /// Front-ends that accept user input should parse trial counts as signed
    /// integers and pass them through here, so that `-5` is reported as an
    /// invalid argument rather than a parse failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::mc::TrialConfig;
    ///
    /// assert_eq!(TrialConfig::trials_from_i64(1_000).unwrap(), 1_000);
    /// assert!(TrialConfig::trials_from_i64(0).is_err());
    /// assert!(TrialConfig::trials_from_i64(-5).is_err());
    /// ```
    pub fn trials_from_i64(trials: i64) -> Result<usize, SimulationError> {
        usize::try_from(trials)
            .ok()
            .filter(|&n| (1..=MAX_TRIALS).contains(&n))
            .ok_or_else(|| SimulationError::invalid_trials(trials, MAX_TRIALS))
    }

    /// Parses a trial count from text, rejecting non-integers as well as
    /// values [`trials_from_i64`](Self::trials_from_i64) rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::mc::TrialConfig;
    ///
    /// assert_eq!(TrialConfig::parse_trials(" 100 ").unwrap(), 100);
    /// assert!(TrialConfig::parse_trials("1.5").is_err());
    /// assert!(TrialConfig::parse_trials("-5").is_err());
    /// ```
    pub fn parse_trials(input: &str) -> Result<usize, SimulationError> {
        let trials = input.trim().parse::<i64>().map_err(|_| {
            SimulationError::invalid_argument(
                "trials",
                format!("'{}' is not an integer", input.trim()),
            )
        })?;
        Self::trials_from_i64(trials)
    }

    /// Returns the number of independent estimates.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the number of samples behind each estimate.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the estimation strategy.
    #[inline]
    pub fn method(&self) -> EstimationMethod {
        self.method
    }

    /// Returns the execution mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] if:
    /// - `trials` is 0 or greater than [`MAX_TRIALS`]
    /// - `batch_size` is 0 or greater than [`MAX_BATCH_SIZE`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(SimulationError::invalid_trials(self.trials, MAX_TRIALS));
        }
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(SimulationError::invalid_argument(
                "batch_size",
                format!("{} is not in range [1, {}]", self.batch_size, MAX_BATCH_SIZE),
            ));
        }
        Ok(())
    }
}

/// Builder for [`TrialConfig`].
///
/// The trial count must be set; every other field has a default
/// (integration method, batch of [`DEFAULT_BATCH_SIZE`], sequential, unseeded).
#[derive(Clone, Debug)]
pub struct TrialConfigBuilder {
    trials: Option<usize>,
    batch_size: usize,
    method: EstimationMethod,
    mode: ExecutionMode,
    seed: Option<u64>,
}

impl Default for TrialConfigBuilder {
    fn default() -> Self {
        Self {
            trials: None,
            batch_size: DEFAULT_BATCH_SIZE,
            method: EstimationMethod::default(),
            mode: ExecutionMode::default(),
            seed: None,
        }
    }
}

impl TrialConfigBuilder {
    /// Sets the number of independent estimates, in [1, 10_000_000].
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Overrides the number of samples per estimate.
    #[inline]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the estimation strategy.
    #[inline]
    pub fn method(mut self, method: EstimationMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] if `trials` is not set
    /// or any value is out of range.
    pub fn build(self) -> Result<TrialConfig, SimulationError> {
        let trials = self
            .trials
            .ok_or_else(|| SimulationError::invalid_argument("trials", "must be specified"))?;

        let config = TrialConfig {
            trials,
            batch_size: self.batch_size,
            method: self.method,
            mode: self.mode,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = TrialConfig::builder().trials(1_000).build().unwrap();

        assert_eq!(config.trials(), 1_000);
        assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(config.method(), EstimationMethod::Integration);
        assert_eq!(config.mode(), ExecutionMode::Sequential);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = TrialConfig::builder()
            .trials(10)
            .batch_size(500)
            .method(EstimationMethod::Counting)
            .mode(ExecutionMode::Parallel)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.batch_size(), 500);
        assert_eq!(config.method(), EstimationMethod::Counting);
        assert_eq!(config.mode(), ExecutionMode::Parallel);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_maybe_seed_clears() {
        let config = TrialConfig::builder()
            .trials(10)
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let err = TrialConfig::builder().trials(0).build().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidArgument { name: "trials", .. }
        ));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let err = TrialConfig::builder()
            .trials(MAX_TRIALS + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.argument(), "trials");
    }

    #[test]
    fn test_config_max_trials_accepted() {
        assert!(TrialConfig::builder().trials(MAX_TRIALS).build().is_ok());
    }

    #[test]
    fn test_config_invalid_batch_size() {
        let err = TrialConfig::builder()
            .trials(10)
            .batch_size(0)
            .build()
            .unwrap_err();
        assert_eq!(err.argument(), "batch_size");

        let err = TrialConfig::builder()
            .trials(10)
            .batch_size(MAX_BATCH_SIZE + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.argument(), "batch_size");
    }

    #[test]
    fn test_config_missing_trials() {
        let err = TrialConfig::builder().build().unwrap_err();
        assert!(err.to_string().contains("must be specified"));
    }

    #[test]
    fn test_trials_from_i64() {
        assert_eq!(TrialConfig::trials_from_i64(1).unwrap(), 1);
        assert_eq!(
            TrialConfig::trials_from_i64(MAX_TRIALS as i64).unwrap(),
            MAX_TRIALS
        );
        for bad in [0, -1, -5, i64::MIN, MAX_TRIALS as i64 + 1] {
            let err = TrialConfig::trials_from_i64(bad).unwrap_err();
            assert_eq!(err.argument(), "trials", "value {}", bad);
        }
    }

    #[test]
    fn test_parse_trials() {
        assert_eq!(TrialConfig::parse_trials("1000000").unwrap(), 1_000_000);

        let err = TrialConfig::parse_trials("1e3").unwrap_err();
        assert!(err.to_string().contains("'1e3' is not an integer"));

        for bad in ["", "abc", "2.5", "0", "-5"] {
            assert_eq!(TrialConfig::parse_trials(bad).unwrap_err().argument(), "trials");
        }
    }

    #[test]
    fn test_execution_mode_default() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Sequential);
    }
}
