//! Methods command implementation
//!
//! Lists the available estimation strategies.

use pi_engine::EstimationMethod;

use crate::Result;

/// Lines printed by the methods command.
pub fn describe() -> Vec<String> {
    EstimationMethod::ALL
        .iter()
        .map(|m| {
            let marker = if *m == EstimationMethod::default() {
                " (default)"
            } else {
                ""
            };
            format!("{:<12} {}{}", m.name(), m.description(), marker)
        })
        .collect()
}

/// Run the methods command
pub fn run() -> Result<()> {
    for line in describe() {
        println!("{}", line);
    }
    Ok(())
}
