//! # Pi Engine (Layer 1: Simulation Kernel)
//!
//! ## Layer 1 Role
//!
//! pi_engine is the numerical kernel of the workspace. Given a trial count N
//! it produces N independent Monte Carlo estimates of π:
//! - Seeded random number generation ([`rng`])
//! - Two interchangeable estimation strategies behind one entry point ([`mc`])
//! - Sequential and Rayon-parallel execution with reproducible output
//!
//! Summary statistics and presentation live in `pi_report` and `service_cli`;
//! this crate has no knowledge of either.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_engine::simulate;
//!
//! let series = simulate(1_000, Some(42)).unwrap();
//! assert_eq!(series.len(), 1_000);
//!
//! // Same seed, same series
//! let again = simulate(1_000, Some(42)).unwrap();
//! assert_eq!(series.as_slice(), again.as_slice());
//! ```
//!
//! ## Choosing a Strategy
//!
//! ```rust
//! use pi_engine::mc::{EstimationMethod, Simulator, TrialConfig};
//!
//! let config = TrialConfig::builder()
//!     .trials(500)
//!     .method(EstimationMethod::Counting)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let series = Simulator::new(config).unwrap().run();
//! assert!(series.iter().all(|&e| (0.0..=4.0).contains(&e)));
//! ```
//!
//! ## Inner Batch Size
//!
//! Every estimate is computed from its own batch of samples (100 by default).
//! N controls how many batches are drawn, not the precision of any single
//! estimate: raising N narrows the standard error of the *distribution's*
//! mean but leaves the per-estimate variance unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![allow(unknown_lints)]

pub mod error;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use error::SimulationError;
pub use mc::{
    simulate, EstimateSeries, EstimationMethod, ExecutionMode, Simulator, TrialConfig,
    TrialConfigBuilder,
};
pub use rng::EstimatorRng;
