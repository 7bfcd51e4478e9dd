//! Monte Carlo estimation of π.
//!
//! # Architecture
//!
//! ```text
//! Simulator
//! ├── TrialConfig       (trials, batch size, method, mode, seed)
//! ├── BatchWorkspace    (reused sample buffer)
//! ├── EstimatorRng      (seeded uniform generation)
//! └── EstimationMethod
//!     ├── Integration   4 · mean(sqrt(1 − x²))
//!     └── Counting      4 · #{x² + y² ≤ 1} / batch
//! ```
//!
//! # Examples
//!
//! ## One-call Simulation
//!
//! ```rust
//! use pi_engine::mc::simulate;
//!
//! let series = simulate(10_000, Some(42)).unwrap();
//! let mean = series.iter().sum::<f64>() / series.len() as f64;
//! assert!((mean - std::f64::consts::PI).abs() < 0.5);
//! ```
//!
//! ## Configured Simulation
//!
//! ```rust
//! use pi_engine::mc::{EstimationMethod, ExecutionMode, Simulator, TrialConfig};
//!
//! let config = TrialConfig::builder()
//!     .trials(100_000)
//!     .method(EstimationMethod::Counting)
//!     .mode(ExecutionMode::Parallel)
//!     .seed(2024)
//!     .build()
//!     .unwrap();
//!
//! let series = Simulator::new(config).unwrap().run();
//! assert_eq!(series.len(), 100_000);
//! ```

pub mod config;
pub mod method;
pub mod series;
pub mod simulator;
pub mod workspace;

// Re-exports for convenient access
pub use config::{
    ExecutionMode, TrialConfig, TrialConfigBuilder, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MAX_TRIALS,
};
pub use method::{counting_estimate, integration_estimate, EstimationMethod};
pub use series::EstimateSeries;
pub use simulator::{simulate, Simulator, PARALLEL_CHUNK};
pub use workspace::BatchWorkspace;
