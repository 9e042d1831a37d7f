// seedrand_sim/src/lib.rs

use std::path::Path;

use log::info;

use crate::simulation::config::{load_scenario, ConfigError};
use crate::simulation::core::prng::SeedSource;
use crate::simulation::core::report::Report;
use crate::simulation::core::simulation_setup::Simulation;

// This prelude is for convenience for other files WITHIN the seedrand_sim crate.
pub mod prelude;

// This module contains all the simulation-specific logic.
pub mod cli;
pub mod simulation;

/// Command-line overrides applied on top of a scenario file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub seed: Option<i32>,
    pub steps: Option<u32>,
}

/// Loads the scenario at `path`, applies `overrides` and runs it to
/// completion.
pub fn run_scenario(path: &Path, overrides: RunOverrides) -> Result<Report, ConfigError> {
    let mut config = load_scenario(path)?;
    if let Some(steps) = overrides.steps {
        config.simulation.steps = steps;
    }

    let seeds = SeedSource::resolve(overrides.seed, config.simulation.seed);
    let simulation = Simulation::new(&config, seeds)?;
    let report = simulation.run();
    info!("Scenario '{}' complete.", path.display());
    Ok(report)
}
