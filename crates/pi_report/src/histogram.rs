//! Density histograms over the observed range of a series.

use serde::Serialize;

use crate::error::{check_series, ReportError};

/// Number of bins used when none is requested.
pub const DEFAULT_BINS: usize = 24;

/// Equal-width density histogram.
///
/// `edges` holds `bins + 1` boundaries evenly spaced between the minimum and
/// maximum of the data. Each bin is half-open `[lo, hi)` except the last,
/// which also includes the maximum. `densities` are normalised so that
/// `Σ density · width == 1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin boundaries, `bins + 1` values.
    pub edges: Vec<f64>,
    /// Raw count per bin.
    pub counts: Vec<usize>,
    /// Probability density per bin.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Common bin width.
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Left edge of each bin paired with its density.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.edges.iter().copied().zip(self.densities.iter().copied())
    }
}

/// Builds a density histogram of `values` with `bins` equal-width bins.
///
/// When every value is identical the range is widened to `[v − 0.5, v + 0.5]`.
///
/// # Errors
///
/// - [`ReportError::InvalidBinCount`] if `bins` is zero
/// - [`ReportError::EmptySeries`] / [`ReportError::NonFiniteValue`] for bad input
///
/// # Examples
///
/// ```rust
/// use pi_report::histogram;
///
/// let hist = histogram(&[0.0, 1.0, 1.0, 2.0], 2).unwrap();
/// assert_eq!(hist.edges, vec![0.0, 1.0, 2.0]);
/// assert_eq!(hist.counts, vec![1, 3]);
/// assert_eq!(hist.densities, vec![0.25, 0.75]);
/// ```
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, ReportError> {
    if bins == 0 {
        return Err(ReportError::InvalidBinCount);
    }
    check_series(values)?;

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let span = hi - lo;
    let step = span / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * step).collect();
    edges.push(hi);

    let norm = bins as f64 / span;
    let mut counts = vec![0usize; bins];
    for &v in values {
        counts[bin_index(v, lo, norm, &edges)] += 1;
    }

    let total = values.len() as f64;
    let densities = counts
        .iter()
        .zip(edges.windows(2))
        .map(|(&count, edge)| count as f64 / (total * (edge[1] - edge[0])))
        .collect();

    Ok(Histogram {
        edges,
        counts,
        densities,
    })
}

/// Bin holding `v`, corrected against `edges` so that a value equal to an
/// interior edge always falls in the bin that edge opens.
fn bin_index(v: f64, lo: f64, norm: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    let index = (((v - lo) * norm) as usize).min(last);
    if v < edges[index] {
        index - 1
    } else if index != last && v >= edges[index + 1] {
        index + 1
    } else {
        index
    }
}
