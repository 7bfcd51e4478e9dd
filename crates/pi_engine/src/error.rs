//! Error types for the simulation kernel.
//!
//! The kernel is a pure computation: the only way it can fail is by being
//! handed arguments outside their valid range. Every such failure is reported
//! as [`SimulationError::InvalidArgument`] before any sampling takes place.

use thiserror::Error;

/// Error raised when a simulation request is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// An argument was missing, non-positive, out of range or unparsable.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: String,
    },
}

impl SimulationError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Creates the error reported for a trial count outside `[1, max]`.
    pub fn invalid_trials(trials: impl std::fmt::Display, max: usize) -> Self {
        Self::invalid_argument(
            "trials",
            format!("{} is not in range [1, {}]", trials, max),
        )
    }

    /// Returns the name of the rejected argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}
