//! Simulation output.

use super::method::EstimationMethod;

/// Ordered, fixed-length sequence of independent π estimates.
///
/// Created by [`Simulator::run`](super::Simulator::run) and immutable
/// afterwards. Alongside the values it records the strategy, the inner batch
/// size and the seed that produced them, so any series can be replayed
/// exactly, including runs seeded from OS entropy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EstimateSeries {
    values: Vec<f64>,
    method: EstimationMethod,
    batch_size: usize,
    seed: u64,
}

impl EstimateSeries {
    pub(crate) fn new(
        values: Vec<f64>,
        method: EstimationMethod,
        batch_size: usize,
        seed: u64,
    ) -> Self {
        Self {
            values,
            method,
            batch_size,
            seed,
        }
    }

    /// Number of estimates.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no estimates. A validated run never
    /// produces an empty series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Estimates in trial order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the estimates in trial order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Strategy that produced the estimates.
    #[inline]
    pub fn method(&self) -> EstimationMethod {
        self.method
    }

    /// Samples behind each estimate.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Seed the run was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Consumes the series, returning the raw values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for EstimateSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a EstimateSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
