//! Monte Carlo simulation driver.
//!
//! # Overview
//!
//! The [`Simulator`] coordinates:
//! 1. Seed resolution (configured seed, or one drawn from OS entropy)
//! 2. Random number generation (via [`EstimatorRng`])
//! 3. Per-trial estimation (via [`EstimationMethod::estimate`])
//!
//! # Reproducibility
//!
//! Sequential mode draws every trial from a single generator seeded with the
//! run seed. Parallel mode splits the trials into chunks of
//! [`PARALLEL_CHUNK`] and seeds chunk `k` with [`mix_seed`]`(seed, k)`, so the
//! output depends only on the configuration and never on the size of the
//! Rayon pool. The two modes are each deterministic but do not produce the
//! same series for the same seed.

use rayon::prelude::*;
use tracing::debug;

use super::config::{ExecutionMode, TrialConfig};
use super::method::EstimationMethod;
use super::series::EstimateSeries;
use super::workspace::BatchWorkspace;
use crate::error::SimulationError;
use crate::rng::{mix_seed, EstimatorRng};

/// Number of trials handled by one generator stream in parallel mode.
pub const PARALLEL_CHUNK: usize = 1024;

/// Monte Carlo π simulator.
///
/// # Examples
///
/// ```rust
/// use pi_engine::mc::{ExecutionMode, Simulator, TrialConfig};
///
/// let config = TrialConfig::builder()
///     .trials(5_000)
///     .mode(ExecutionMode::Parallel)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let simulator = Simulator::new(config).unwrap();
/// let first = simulator.run();
/// let second = simulator.run();
///
/// assert_eq!(first.len(), 5_000);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    config: TrialConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidArgument`] if the configuration is invalid.
    pub fn new(config: TrialConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs the simulation, producing exactly `trials` estimates.
    ///
    /// An unseeded configuration draws a fresh seed from OS entropy on every
    /// call; the seed actually used is recorded on the returned series.
    pub fn run(&self) -> EstimateSeries {
        let rng = match self.config.seed() {
            Some(seed) => EstimatorRng::from_seed(seed),
            None => EstimatorRng::from_entropy(),
        };
        let seed = rng.seed();
        let trials = self.config.trials();
        let batch_size = self.config.batch_size();
        let method = self.config.method();

        debug!(
            trials,
            batch_size,
            %method,
            mode = ?self.config.mode(),
            seed,
            "running pi simulation"
        );

        let values = match self.config.mode() {
            ExecutionMode::Sequential => run_sequential(method, trials, batch_size, rng),
            ExecutionMode::Parallel => run_parallel(method, trials, batch_size, seed),
        };

        EstimateSeries::new(values, method, batch_size, seed)
    }
}

/// Produces `n` estimates of π with the default strategy and batch size.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidArgument`] if `n` is zero or exceeds
/// [`MAX_TRIALS`](super::config::MAX_TRIALS).
///
/// # Examples
///
/// ```rust
/// use pi_engine::simulate;
///
/// let series = simulate(100, Some(1)).unwrap();
/// assert_eq!(series.len(), 100);
/// assert!(simulate(0, None).is_err());
/// ```
pub fn simulate(n: usize, seed: Option<u64>) -> Result<EstimateSeries, SimulationError> {
    let config = TrialConfig::builder().trials(n).maybe_seed(seed).build()?;
    Ok(Simulator::new(config)?.run())
}

/// Fills `out` with consecutive estimates drawn from `rng`.
fn fill_estimates(
    method: EstimationMethod,
    rng: &mut EstimatorRng,
    workspace: &mut BatchWorkspace,
    out: &mut [f64],
) {
    for estimate in out.iter_mut() {
        rng.fill_uniform(workspace.samples_mut());
        *estimate = method.estimate(workspace.samples());
    }
}

fn run_sequential(
    method: EstimationMethod,
    trials: usize,
    batch_size: usize,
    mut rng: EstimatorRng,
) -> Vec<f64> {
    let mut workspace = BatchWorkspace::new(method.draws_per_estimate(batch_size));
    let mut values = vec![0.0; trials];
    fill_estimates(method, &mut rng, &mut workspace, &mut values);
    values
}

fn run_parallel(method: EstimationMethod, trials: usize, batch_size: usize, seed: u64) -> Vec<f64> {
    let draws = method.draws_per_estimate(batch_size);
    let mut values = vec![0.0; trials];
    values
        .par_chunks_mut(PARALLEL_CHUNK)
        .enumerate()
        .for_each(|(chunk, out)| {
            let mut rng = EstimatorRng::from_seed(mix_seed(seed, chunk as u64));
            let mut workspace = BatchWorkspace::new(draws);
            fill_estimates(method, &mut rng, &mut workspace, out);
        });
    values
}
