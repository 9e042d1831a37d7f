// seedrand_sim/src/simulation/core/prng.rs

use log::{info, warn};
use rand::rngs::OsRng;
use rand::RngCore;
use seedrand_core::prelude::SeededRandomGenerator;

/// The master pseudo-random number generator for a run.
///
/// Nothing draws from it directly: every stream receives its own generator
/// from [`SeedSource::fork`] and owns it for the rest of the run, so adding a
/// stream never disturbs the values seen by the streams forked before it.
#[derive(Debug, Clone)]
pub struct SeedSource {
    seed: i32,
    master: SeededRandomGenerator,
}

impl SeedSource {
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            master: SeededRandomGenerator::new(seed),
        }
    }

    /// Picks the seed for a run: an explicit override wins over the
    /// scenario's seed, and OS entropy is the fallback.
    pub fn resolve(override_seed: Option<i32>, scenario_seed: Option<i32>) -> Self {
        match override_seed.or(scenario_seed) {
            Some(seed) => {
                info!("Using seed {}", seed);
                Self::new(seed)
            }
            None => {
                let seed = OsRng.next_u32() as i32;
                warn!(
                    "No seed configured; drew {} from OS entropy (pass --seed {} to reproduce)",
                    seed, seed
                );
                Self::new(seed)
            }
        }
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Hands out a new, independently owned generator.
    ///
    /// Child seeds come from the master's `next_int`, so only their low 16
    /// bits differentiate children; two children may share a stream.
    pub fn fork(&mut self) -> SeededRandomGenerator {
        SeededRandomGenerator::new(self.master.next_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forks_follow_the_master_stream() {
        let mut source = SeedSource::new(0);
        // The master's first two registers for seed 0.
        assert_eq!(source.fork(), SeededRandomGenerator::new(0xE01E_F01Fu32 as i32));
        assert_eq!(source.fork(), SeededRandomGenerator::new(0xFDBC_ED31u32 as i32));
    }

    #[test]
    fn override_beats_scenario_seed() {
        assert_eq!(SeedSource::resolve(Some(5), Some(9)).seed(), 5);
        assert_eq!(SeedSource::resolve(None, Some(9)).seed(), 9);
    }

    #[test]
    fn same_seed_forks_identically() {
        let mut a = SeedSource::new(321);
        let mut b = SeedSource::new(321);
        for _ in 0..10 {
            assert_eq!(a.fork(), b.fork());
        }
    }
}
