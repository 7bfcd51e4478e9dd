//! Empirical percentiles using the Hazen plotting position.
//!
//! For `n` sorted values the p-th percentile sits at the 1-based position
//! `h = n · p / 100 + 0.5`, clamped to `[1, n]`, and is linearly interpolated
//! between the order statistics `⌊h⌋` and `⌊h⌋ + 1`. This matches NumPy's
//! `percentile(..., method="hazen")`.

use crate::error::{check_series, ReportError};

/// Returns the p-th percentile of already sorted, finite values.
///
/// # Errors
///
/// - [`ReportError::EmptySeries`] if `sorted` is empty
/// - [`ReportError::InvalidPercentile`] if `p` is outside [0, 100]
///
/// # Examples
///
/// ```rust
/// use pi_report::percentile_hazen;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_hazen(&sorted, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile_hazen(&sorted, 25.0).unwrap(), 1.5);
/// assert_eq!(percentile_hazen(&sorted, 2.5).unwrap(), 1.0);
/// ```
pub fn percentile_hazen(sorted: &[f64], p: f64) -> Result<f64, ReportError> {
    if sorted.is_empty() {
        return Err(ReportError::EmptySeries);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(ReportError::InvalidPercentile(p));
    }

    let n = sorted.len();
    let h = (n as f64 * p / 100.0 + 0.5).clamp(1.0, n as f64);
    let lower = h.floor() as usize;
    if lower >= n {
        return Ok(sorted[n - 1]);
    }

    let frac = h - lower as f64;
    let a = sorted[lower - 1];
    let b = sorted[lower];
    Ok(a + frac * (b - a))
}

/// Returns several percentiles of unsorted values in one pass over a sorted copy.
///
/// # Errors
///
/// Fails if `values` is empty or non-finite, or any percentile is out of range.
pub fn percentiles_hazen(values: &[f64], ps: &[f64]) -> Result<Vec<f64>, ReportError> {
    check_series(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    ps.iter().map(|&p| percentile_hazen(&sorted, p)).collect()
}
