// seedrand_sim/src/simulation/core/simulation_setup.rs

use log::{debug, info};

use super::prng::SeedSource;
use super::report::{Report, StreamSummary};
use super::streams::SampleStream;
use crate::simulation::config::{ConfigError, ScenarioConfig};

/// A fully built run: every stream has been validated and handed its own
/// generator, in the order the scenario lists them.
#[derive(Debug, Clone)]
pub struct Simulation {
    seed: i32,
    steps: u32,
    streams: Vec<SampleStream>,
}

impl Simulation {
    /// Builds a run from `config`, forking one generator per stream from
    /// the master seeded with `seeds`.
    pub fn new(config: &ScenarioConfig, mut seeds: SeedSource) -> Result<Self, ConfigError> {
        config.validate()?;

        // A stream never records more preview samples than there are steps.
        let preview_len = config
            .simulation
            .preview
            .min(config.simulation.steps as usize);

        let mut streams = Vec::with_capacity(config.streams.len());
        for stream_config in &config.streams {
            info!(
                "  -> Spawning {} stream '{}'",
                stream_config.get_kind_str(),
                stream_config.name()
            );
            let stream = SampleStream::new(stream_config, seeds.fork(), preview_len)?;
            streams.push(stream);
        }

        Ok(Self {
            seed: seeds.seed(),
            steps: config.simulation.steps,
            streams,
        })
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Steps every stream once per simulation step, then summarizes.
    pub fn run(mut self) -> Report {
        info!(
            "Running {} streams for {} steps (seed {})",
            self.streams.len(),
            self.steps,
            self.seed
        );
        for _ in 0..self.steps {
            for stream in &mut self.streams {
                stream.step();
            }
        }

        for stream in &self.streams {
            debug!("Stream '{}' finished: {:?}", stream.name(), stream.stats());
        }

        Report {
            seed: self.seed,
            steps: self.steps,
            streams: self.streams.iter().map(StreamSummary::from).collect(),
        }
    }
}
