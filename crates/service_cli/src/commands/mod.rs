//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod methods;
pub mod run;
pub mod sweep;
