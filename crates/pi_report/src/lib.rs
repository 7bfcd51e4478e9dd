//! # Pi Report (Layer 2: Statistics)
//!
//! Summarises a series of independent Monte Carlo estimates:
//! - mean and population standard deviation
//! - normal-approximation confidence interval for the mean
//! - empirical percentile band (Hazen convention)
//! - equal-width density histogram
//!
//! The crate works on plain `&[f64]` slices and has no dependency on the
//! simulation kernel.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_report::{histogram, summarize, DEFAULT_BINS, DEFAULT_CONFIDENCE};
//!
//! let estimates = [3.08, 3.12, 3.16, 3.20, 3.24, 3.12, 3.16];
//! let report = summarize(&estimates, DEFAULT_CONFIDENCE).unwrap();
//! let hist = histogram(&estimates, DEFAULT_BINS).unwrap();
//!
//! assert_eq!(report.trials, 7);
//! assert_eq!(hist.bins(), 24);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod histogram;
pub mod percentile;
pub mod summary;

pub use error::ReportError;
pub use histogram::{histogram, Histogram, DEFAULT_BINS};
pub use percentile::{percentile_hazen, percentiles_hazen};
pub use summary::{summarize, z_score, SummaryReport, DEFAULT_CONFIDENCE, Z_95};
