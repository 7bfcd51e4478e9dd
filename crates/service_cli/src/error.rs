//! Error types for the CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line or configuration argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Simulation rejected its input
    #[error(transparent)]
    Simulation(#[from] pi_engine::SimulationError),

    /// Report computation failed
    #[error("Report error: {0}")]
    Report(#[from] pi_report::ReportError),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by every command.
pub type Result<T> = std::result::Result<T, CliError>;
