// seedrand_sim/src/simulation/core/mod.rs

pub mod prng;
pub mod report;
pub mod simulation_setup;
pub mod streams;
