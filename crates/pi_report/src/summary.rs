//! Summary statistics of a series of estimates.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::error::{check_series, ReportError};
use crate::percentile::percentiles_hazen;

/// Confidence level reported by default.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Two-sided normal critical value used for the 95% level.
pub const Z_95: f64 = 1.96;

/// Descriptive statistics of a series of π estimates.
///
/// The confidence interval is the normal approximation for the mean,
/// `mean ± z · σ / √N`, while the percentile band is the empirical spread of
/// individual estimates. The first narrows as N grows; the second does not.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Number of estimates.
    pub trials: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
    /// Confidence level of both intervals.
    pub confidence: f64,
    /// Lower bound of the normal confidence interval for the mean.
    pub ci_low: f64,
    /// Upper bound of the normal confidence interval for the mean.
    pub ci_high: f64,
    /// `ci_high - ci_low`.
    pub ci_width: f64,
    /// Lower empirical percentile, `100 · (1 − c) / 2`.
    pub p_low: f64,
    /// Upper empirical percentile, `100 · (1 − (1 − c) / 2)`.
    pub p_high: f64,
    /// `p_high - p_low`.
    pub p_width: f64,
    /// Smallest estimate.
    pub min: f64,
    /// Largest estimate.
    pub max: f64,
    /// Signed error of the mean against π.
    pub error: f64,
}

/// Two-sided standard normal critical value for confidence level `c`.
///
/// The 95% level uses the conventional rounded value [`Z_95`].
///
/// # Errors
///
/// [`ReportError::InvalidConfidence`] unless `0 < c < 1`.
pub fn z_score(confidence: f64) -> Result<f64, ReportError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ReportError::InvalidConfidence(confidence));
    }
    if confidence == DEFAULT_CONFIDENCE {
        return Ok(Z_95);
    }
    let normal = Normal::new(0.0, 1.0).map_err(|_| ReportError::InvalidConfidence(confidence))?;
    Ok(normal.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

/// Computes the summary statistics of `values` at the given confidence level.
///
/// # Errors
///
/// Fails on an empty or non-finite series, or a confidence outside (0, 1).
///
/// # Examples
///
/// ```rust
/// use pi_report::summarize;
///
/// let report = summarize(&[3.0, 3.2, 3.1, 3.3], 0.95).unwrap();
/// assert_eq!(report.trials, 4);
/// assert!((report.mean - 3.15).abs() < 1e-12);
/// assert!(report.ci_low < report.mean && report.mean < report.ci_high);
/// ```
pub fn summarize(values: &[f64], confidence: f64) -> Result<SummaryReport, ReportError> {
    check_series(values)?;
    let z = z_score(confidence)?;

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let half_width = z * std_dev / n.sqrt();
    let ci_low = mean - half_width;
    let ci_high = mean + half_width;

    let tail = 100.0 * (1.0 - confidence) / 2.0;
    let band = percentiles_hazen(values, &[tail, 100.0 - tail])?;
    let (p_low, p_high) = (band[0], band[1]);

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    Ok(SummaryReport {
        trials: values.len(),
        mean,
        std_dev,
        confidence,
        ci_low,
        ci_high,
        ci_width: ci_high - ci_low,
        p_low,
        p_high,
        p_width: p_high - p_low,
        min,
        max,
        error: mean - PI,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let report = summarize(&values, 0.95).unwrap();

        assert_relative_eq!(report.mean, 5.0);
        assert_relative_eq!(report.std_dev, 2.0);
        let half = 1.96 * 2.0 / 8.0_f64.sqrt();
        assert_relative_eq!(report.ci_low, 5.0 - half, epsilon = 1e-12);
        assert_relative_eq!(report.ci_high, 5.0 + half, epsilon = 1e-12);
        assert_relative_eq!(report.ci_width, 2.0 * half, epsilon = 1e-12);
        assert_eq!(report.min, 2.0);
        assert_eq!(report.max, 9.0);
        // h(2.5) = 0.7 and h(97.5) = 8.3 clamp to the extremes
        assert_eq!(report.p_low, 2.0);
        assert_eq!(report.p_high, 9.0);
        assert_relative_eq!(report.error, 5.0 - PI);
    }

    #[test]
    fn test_single_value_has_zero_width() {
        let report = summarize(&[3.14], 0.95).unwrap();
        assert_eq!(report.std_dev, 0.0);
        assert_eq!(report.ci_width, 0.0);
        assert_eq!(report.p_width, 0.0);
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(0.95).unwrap(), Z_95);
        assert_relative_eq!(z_score(0.99).unwrap(), 2.5758, epsilon = 1e-3);
        assert_relative_eq!(z_score(0.90).unwrap(), 1.6449, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_confidence() {
        for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                summarize(&[1.0], c),
                Err(ReportError::InvalidConfidence(_))
            ));
        }
    }

    #[test]
    fn test_wider_confidence_wider_interval() {
        let values = [3.0, 3.1, 3.2, 3.3, 3.4];
        let narrow = summarize(&values, 0.80).unwrap();
        let wide = summarize(&values, 0.99).unwrap();
        assert!(wide.ci_width > narrow.ci_width);
    }
}
