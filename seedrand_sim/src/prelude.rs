// seedrand_sim/src/prelude.rs

// Re-export the entire seedrand_core prelude so you can easily access
// the generator and its error types.
pub use seedrand_core::prelude::*;

// Re-export common simulation-specific types for easy access.
pub use crate::simulation::config::{
    discover_scenarios, load_scenario, ConfigError, ScenarioConfig, StreamConfig,
};
pub use crate::simulation::core::prng::SeedSource;
pub use crate::simulation::core::report::{Report, StreamSummary};
pub use crate::simulation::core::simulation_setup::Simulation;
pub use crate::{run_scenario, RunOverrides};
