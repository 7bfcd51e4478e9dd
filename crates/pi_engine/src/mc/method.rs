//! Estimation strategies.
//!
//! Both strategies turn one batch of uniform samples on [0, 1) into a single
//! estimate of π. They differ in how many uniforms a batch consumes and in
//! how the samples are reduced:
//!
//! | Strategy | Uniforms per estimate | Estimate |
//! |----------|-----------------------|----------|
//! | [`EstimationMethod::Integration`] | `batch` | `4 · mean(sqrt(1 − x²))` |
//! | [`EstimationMethod::Counting`] | `2 · batch` | `4 · #{x² + y² ≤ 1} / batch` |
//!
//! Dispatch is a `match` on the enum so the per-trial loop stays free of
//! dynamic dispatch.

use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Monte Carlo strategy used to turn a batch of samples into an estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EstimationMethod {
    /// Quarter-circle area by averaging `sqrt(1 − x²)` over uniform `x`.
    #[default]
    Integration,
    /// Fraction of uniform points `(x, y)` falling inside the unit quarter-circle.
    Counting,
}

impl EstimationMethod {
    /// All available strategies, in display order.
    pub const ALL: [EstimationMethod; 2] = [Self::Integration, Self::Counting];

    /// Lowercase identifier used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integration => "integration",
            Self::Counting => "counting",
        }
    }

    /// Short human-readable description of the strategy.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Integration => "4 x mean of sqrt(1 - x^2) over uniform x in [0, 1)",
            Self::Counting => "4 x fraction of uniform points (x, y) with x^2 + y^2 <= 1",
        }
    }

    /// Number of uniform variates consumed by one estimate of `batch_size` samples.
    #[inline]
    pub fn draws_per_estimate(&self, batch_size: usize) -> usize {
        match self {
            Self::Integration => batch_size,
            Self::Counting => 2 * batch_size,
        }
    }

    /// Reduces one batch of uniforms to an estimate of π.
    ///
    /// `uniforms` must hold exactly
    /// [`draws_per_estimate`](Self::draws_per_estimate) values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pi_engine::mc::EstimationMethod;
    ///
    /// // x = 0 gives sqrt(1 - 0) = 1 at every point, so the estimate is 4
    /// assert_eq!(EstimationMethod::Integration.estimate(&[0.0; 10]), 4.0);
    ///
    /// // One point inside, one point outside
    /// let pairs = [0.1, 0.1, 0.9, 0.9];
    /// assert_eq!(EstimationMethod::Counting.estimate(&pairs), 2.0);
    /// ```
    #[inline]
    pub fn estimate(&self, uniforms: &[f64]) -> f64 {
        match self {
            Self::Integration => integration_estimate(uniforms),
            Self::Counting => counting_estimate(uniforms),
        }
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EstimationMethod {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integration" => Ok(Self::Integration),
            "counting" => Ok(Self::Counting),
            other => Err(SimulationError::invalid_argument(
                "method",
                format!("unknown method '{}'. Supported: integration, counting", other),
            )),
        }
    }
}

/// Quarter-circle integration: `4 · mean(sqrt(1 − x²))`.
///
/// Returns 0 for an empty slice.
#[inline]
pub fn integration_estimate(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let sum: f64 = xs.iter().map(|&x| (1.0 - x * x).sqrt()).sum();
    4.0 * sum / xs.len() as f64
}

/// Point-in-circle counting over consecutive `(x, y)` pairs.
///
/// A trailing unpaired value is ignored. Returns 0 when no pair is present.
#[inline]
pub fn counting_estimate(pairs: &[f64]) -> f64 {
    let n_pairs = pairs.len() / 2;
    if n_pairs == 0 {
        return 0.0;
    }
    let inside = pairs
        .chunks_exact(2)
        .filter(|p| p[0] * p[0] + p[1] * p[1] <= 1.0)
        .count();
    4.0 * inside as f64 / n_pairs as f64
}
