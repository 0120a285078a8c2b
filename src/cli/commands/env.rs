use anyhow::Result;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::env_audit::audit_all;

pub fn execute(config: &Config) -> Result<()> {
    output::print_env_header();
    audit(config);
    Ok(())
}

/// Prints every profile's outcome and returns how many profiles failed.
pub fn audit(config: &Config) -> usize {
    let outcomes = audit_all(&config.env);
    for (profile, outcome) in &outcomes {
        output::print_audit(profile, outcome);
    }
    outcomes.iter().filter(|(_, o)| !o.is_complete()).count()
}
