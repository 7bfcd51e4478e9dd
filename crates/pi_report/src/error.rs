//! Error types for report computation.

use thiserror::Error;

/// Errors raised while summarising a series of estimates.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ReportError {
    /// The series holds no values.
    #[error("Cannot summarise an empty series")]
    EmptySeries,

    /// A value is NaN or infinite.
    #[error("Non-finite value at index {0}")]
    NonFiniteValue(usize),

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {0}: must be in (0, 1)")]
    InvalidConfidence(f64),

    /// Percentile outside [0, 100].
    #[error("Invalid percentile {0}: must be in [0, 100]")]
    InvalidPercentile(f64),

    /// Histogram requested with zero bins.
    #[error("Histogram requires at least one bin")]
    InvalidBinCount,
}

/// Checks that `values` is non-empty and entirely finite.
pub(crate) fn check_series(values: &[f64]) -> Result<(), ReportError> {
    if values.is_empty() {
        return Err(ReportError::EmptySeries);
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ReportError::NonFiniteValue(index)),
        None => Ok(()),
    }
}
