//! # Random Number Generation Infrastructure
//!
//! This module provides the random source for the simulation kernel: a
//! seeded PRNG wrapper producing uniform variates in [0, 1), and a seed
//! mixing function used to derive independent streams for parallel chunks.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: A supplied seed initialises the generator; the same
//!   seed always yields the same sequence of samples
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: No `Box<dyn Trait>` in the sampling loop
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions
//! ("initialise", "behaviour", "optimisation").
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_engine::rng::EstimatorRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = EstimatorRng::from_seed(12345);
//!
//! // Generate a uniform value in [0, 1)
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Batch generation into a pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 100];
//! rng.fill_uniform(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::{mix_seed, EstimatorRng};

#[cfg(test)]
mod tests;
