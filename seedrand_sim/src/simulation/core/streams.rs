// seedrand_sim/src/simulation/core/streams.rs

use nalgebra::Vector3;
use rand_distr::{Distribution, Normal};
use seedrand_core::prelude::SeededRandomGenerator;

use crate::simulation::config::{ConfigError, StreamConfig};

/// How a stream turns one step into one sample.
#[derive(Debug, Clone)]
enum Sampler {
    Int { min: i32, max: i32, unbiased: bool },
    Float { min: f32, max: f32 },
    // Store the noise distribution for efficiency
    Gaussian(Normal<f64>),
    Scatter { min: Vector3<f32>, max: Vector3<f32> },
    Shuffle(Vec<usize>),
}

/// A named stream of samples that owns its generator.
#[derive(Debug, Clone)]
pub struct SampleStream {
    name: String,
    kind: &'static str,
    rng: SeededRandomGenerator,
    sampler: Sampler,
    stats: RunningStats,
    preview: Vec<f64>,
    preview_len: usize,
}

impl SampleStream {
    pub fn new(
        config: &StreamConfig,
        rng: SeededRandomGenerator,
        preview_len: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = match config {
            StreamConfig::Int {
                min, max, unbiased, ..
            } => Sampler::Int {
                min: *min,
                max: *max,
                unbiased: *unbiased,
            },
            StreamConfig::Float { min, max, .. } => Sampler::Float {
                min: *min,
                max: *max,
            },
            StreamConfig::Gaussian { mean, std_dev, .. } => {
                let normal =
                    Normal::new(*mean, *std_dev).map_err(|e| ConfigError::InvalidStream {
                        name: config.name().to_string(),
                        reason: e.to_string(),
                    })?;
                Sampler::Gaussian(normal)
            }
            StreamConfig::Scatter { extents, .. } => {
                let max = Vector3::from(*extents);
                Sampler::Scatter { min: -max, max }
            }
            StreamConfig::Shuffle { len, .. } => Sampler::Shuffle((0..*len).collect()),
        };

        Ok(Self {
            name: config.name().to_string(),
            kind: config.get_kind_str(),
            rng,
            sampler,
            stats: RunningStats::default(),
            // Grows as samples arrive; `preview_len` may far exceed the step count.
            preview: Vec::new(),
            preview_len,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Draws one sample and folds it into the statistics.
    pub fn step(&mut self) -> f64 {
        let rng = &mut self.rng;
        let sample = match &mut self.sampler {
            Sampler::Int { min, max, unbiased } => {
                if *unbiased {
                    rng.next_int_range_unbiased(*min, *max) as f64
                } else {
                    rng.next_int_range(*min, *max) as f64
                }
            }
            Sampler::Float { min, max } => rng.next_float_range(*min, *max) as f64,
            Sampler::Gaussian(normal) => normal.sample(rng),
            Sampler::Scatter { min, max } => rng.next_vector3(min, max).norm() as f64,
            Sampler::Shuffle(deck) => {
                for (i, card) in deck.iter_mut().enumerate() {
                    *card = i;
                }
                rng.shuffle(deck.as_mut_slice());
                deck[0] as f64
            }
        };

        self.stats.push(sample);
        if self.preview.len() < self.preview_len {
            self.preview.push(sample);
        }
        sample
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    pub fn preview(&self) -> &[f64] {
        &self.preview
    }
}

/// Count, extremes and mean of everything a stream produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
        }
    }
}

impl RunningStats {
    pub fn push(&mut self, sample: f64) {
        self.count += 1;
        self.min = self.min.min(sample);
        self.max = self.max.max(sample);
        // Incremental mean; avoids summing large streams.
        self.mean += (sample - self.mean) / self.count as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn stream(config: StreamConfig, seed: i32) -> SampleStream {
        SampleStream::new(&config, SeededRandomGenerator::new(seed), 4).unwrap()
    }

    #[test]
    fn int_stream_matches_generator_directly() {
        let mut s = stream(
            StreamConfig::Int {
                name: "digits".to_string(),
                min: 0,
                max: 10,
                unbiased: false,
            },
            42,
        );
        let drawn: Vec<f64> = (0..5).map(|_| s.step()).collect();
        assert_eq!(drawn, vec![1.0, 5.0, 7.0, 1.0, 8.0]);
        assert_eq!(s.preview(), &[1.0, 5.0, 7.0, 1.0]);
        assert_eq!(s.stats().count, 5);
        assert_eq!(s.stats().min, 1.0);
        assert_eq!(s.stats().max, 8.0);
        assert_abs_diff_eq!(s.stats().mean, 4.4, epsilon = 1e-12);
    }

    #[test]
    fn float_and_scatter_streams_stay_bounded() {
        let mut floats = stream(
            StreamConfig::Float {
                name: "unit".to_string(),
                min: -2.0,
                max: 3.0,
            },
            7,
        );
        let mut points = stream(
            StreamConfig::Scatter {
                name: "points".to_string(),
                extents: [1.0, 2.0, 2.0],
            },
            7,
        );
        for _ in 0..1_000 {
            let f = floats.step();
            assert!((-2.0..3.0).contains(&f));
            // The box corner is at distance 3.
            assert!(points.step() <= 3.0);
        }
    }

    #[test]
    fn shuffle_stream_reports_a_deck_member() {
        let mut deck = stream(
            StreamConfig::Shuffle {
                name: "deck".to_string(),
                len: 52,
            },
            13,
        );
        for _ in 0..200 {
            let top = deck.step();
            assert!((0.0..52.0).contains(&top));
            assert_eq!(top.fract(), 0.0);
        }
    }

    #[test]
    fn gaussian_stream_with_zero_spread_is_constant() {
        let mut noise = stream(
            StreamConfig::Gaussian {
                name: "noise".to_string(),
                mean: 2.5,
                std_dev: 0.0,
            },
            1,
        );
        for _ in 0..10 {
            assert_eq!(noise.step(), 2.5);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = SampleStream::new(
            &StreamConfig::Float {
                name: "bad".to_string(),
                min: 1.0,
                max: f32::NAN,
            },
            SeededRandomGenerator::new(0),
            0,
        );
        assert!(matches!(result, Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn huge_preview_does_not_preallocate() {
        let mut s = SampleStream::new(
            &StreamConfig::Float {
                name: "unit".to_string(),
                min: 0.0,
                max: 1.0,
            },
            SeededRandomGenerator::new(3),
            usize::MAX / 4,
        )
        .unwrap();
        s.step();
        assert_eq!(s.preview().len(), 1);
    }

    #[test]
    fn running_stats_track_extremes() {
        let mut stats = RunningStats::default();
        for sample in [3.0, -1.0, 4.0, 2.0] {
            stats.push(sample);
        }
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 4.0);
        assert_abs_diff_eq!(stats.mean, 2.0, epsilon = 1e-12);
    }
}
