//! Sweep command implementation
//!
//! Runs every power-of-ten trial count in a range (100 through 10,000,000 by
//! default) and prints one summary row per count, showing the confidence
//! interval of the mean narrowing while the percentile band stays put.

use pi_engine::mc::MAX_TRIALS;
use pi_engine::Simulator;
use pi_report::{summarize, SummaryReport};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::render::{format_thousands, render_summary_table};
use crate::{CliError, Result};

/// Trial counts `10^from ..= 10^to`.
pub fn trial_counts(from_exp: u32, to_exp: u32) -> Result<Vec<usize>> {
    if from_exp > to_exp {
        return Err(CliError::InvalidArgument(format!(
            "from-exp {} is greater than to-exp {}",
            from_exp, to_exp
        )));
    }
    (from_exp..=to_exp)
        .map(|exp| {
            10usize
                .checked_pow(exp)
                .filter(|&n| n <= MAX_TRIALS)
                .ok_or_else(|| {
                    CliError::InvalidArgument(format!(
                        "10^{} exceeds the maximum of {} trials",
                        exp,
                        format_thousands(MAX_TRIALS)
                    ))
                })
        })
        .collect()
}

/// Summaries for each trial count.
pub fn execute(config: &CliConfig, from_exp: u32, to_exp: u32) -> Result<Vec<SummaryReport>> {
    trial_counts(from_exp, to_exp)?
        .into_iter()
        .map(|trials| -> Result<SummaryReport> {
            info!("Computing {} estimates...", format_thousands(trials));
            let series = Simulator::new(config.trial_config_for(trials)?)?.run();
            Ok(summarize(series.as_slice(), config.confidence)?)
        })
        .collect()
}

/// Run the sweep command
pub fn run(config: &CliConfig, from_exp: u32, to_exp: u32) -> Result<()> {
    let reports = execute(config, from_exp, to_exp)?;
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Table => print!("{}", render_summary_table(&reports)),
    }
    Ok(())
}
