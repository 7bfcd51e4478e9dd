//! Run command implementation
//!
//! Simulates one trial count, summarises the estimates and prints the
//! statistics table and histogram (or a JSON document).

use pi_engine::{EstimateSeries, Simulator, TrialConfig};
use pi_report::{histogram, summarize, Histogram, SummaryReport};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::render::{format_thousands, render_histogram, render_summary_table};
use crate::Result;

/// Everything the run command reports, in serialisable form.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    /// Engine configuration used
    pub config: TrialConfig,
    /// Seed actually used, including one drawn from entropy
    pub seed: u64,
    /// Summary statistics
    pub summary: SummaryReport,
    /// Density histogram
    pub histogram: Histogram,
}

/// Simulates and summarises according to `config`.
pub fn execute(config: &CliConfig) -> Result<RunOutput> {
    let trial_config = config.trial_config()?;
    let simulator = Simulator::new(trial_config.clone())?;

    info!(
        "Computing {} estimates ({} method, {} samples each)...",
        format_thousands(trial_config.trials()),
        trial_config.method(),
        trial_config.batch_size()
    );
    let series: EstimateSeries = simulator.run();
    info!("Done! (seed {})", series.seed());

    let summary = summarize(series.as_slice(), config.confidence)?;
    let histogram = histogram(series.as_slice(), config.bins)?;

    Ok(RunOutput {
        config: trial_config,
        seed: series.seed(),
        summary,
        histogram,
    })
}

/// Renders a run in the requested format.
pub fn render(output: &RunOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Table => Ok(format!(
            "Monte Carlo simulation\n\n{}\n{}\nReal value up to 4 decimal places: {:.4}\n",
            render_summary_table(std::slice::from_ref(&output.summary)),
            render_histogram(&output.histogram),
            PI
        )),
    }
}

/// Run the run command
pub fn run(config: &CliConfig) -> Result<()> {
    let output = execute(config)?;
    print!("{}", render(&output, config.format)?);
    Ok(())
}
