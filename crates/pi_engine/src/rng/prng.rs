//! Pseudo-random number generator wrapper for Monte Carlo estimation.
//!
//! This module provides [`EstimatorRng`], a seeded PRNG wrapper that offers
//! reproducible uniform sampling with efficient batch operations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Golden-ratio increment used by the SplitMix64 stream derivation.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Monte Carlo estimation random number generator.
///
/// Provides seeded, reproducible uniform sampling on the half-open unit
/// interval [0, 1). The seed is retained so that a run drawn from OS entropy
/// can still be reported and replayed.
///
/// # Examples
///
/// ```rust
/// use pi_engine::rng::EstimatorRng;
///
/// let mut rng = EstimatorRng::from_seed(42);
///
/// // Single value generation
/// let u: f64 = rng.gen_uniform();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// ```
pub struct EstimatorRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Uniform distribution on [0, 1).
    unit: Uniform<f64>,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl EstimatorRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::rng::EstimatorRng;
    ///
    /// let mut rng1 = EstimatorRng::from_seed(12345);
    /// let mut rng2 = EstimatorRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            unit: Uniform::new(0.0, 1.0),
            seed,
        }
    }

    /// Creates a new RNG instance with a seed drawn from the thread-local
    /// entropy source.
    ///
    /// The drawn seed is available through [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::rng::EstimatorRng;
    ///
    /// let rng = EstimatorRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.unit.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::rng::EstimatorRng;
    ///
    /// let mut rng = EstimatorRng::from_seed(42);
    /// let mut buffer = vec![0.0; 1000];
    /// rng.fill_uniform(&mut buffer);
    ///
    /// for &value in &buffer {
    ///     assert!(value >= 0.0 && value < 1.0);
    /// }
    /// ```
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.unit.sample(&mut self.inner);
        }
    }
}

/// Derives the seed of an independent stream from a base seed.
///
/// Applies the SplitMix64 finaliser to `base` offset by `(stream + 1)`
/// golden-ratio increments, so neighbouring streams receive well separated
/// seeds. Parallel simulation seeds chunk `k` with `mix_seed(seed, k)`.
///
/// # Examples
///
/// ```rust
/// use pi_engine::rng::mix_seed;
///
/// assert_eq!(mix_seed(42, 3), mix_seed(42, 3));
/// assert_ne!(mix_seed(42, 0), mix_seed(42, 1));
/// ```
#[inline]
pub fn mix_seed(base: u64, stream: u64) -> u64 {
    let mut z = base.wrapping_add(stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
