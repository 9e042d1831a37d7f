// seedrand_sim/src/simulation/config/structs.rs

use serde::{Deserialize, Serialize};

// =========================================================================
// == Top-Level Scenario ==
// =========================================================================

/// # ScenarioConfig
/// The root of the data parsed from a `scenario.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)] // Use defaults if the [simulation] section is missing
    pub simulation: SimulationSettings,

    // The TOML has `[[streams]]`, which becomes a Vec of StreamConfig.
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct SimulationSettings {
    /// Seed for the master generator. Drawn from OS entropy when absent.
    pub seed: Option<i32>,
    /// Draws taken from every stream.
    pub steps: u32,
    /// How many leading samples of each stream the report keeps.
    pub preview: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            steps: 1000,
            preview: 8,
        }
    }
}

/// Largest deck a `shuffle` stream may use.
pub const MAX_SHUFFLE_LEN: usize = 1 << 20;

// =========================================================================
// == Streams ==
// =========================================================================

// The `tag = "kind"` tells Serde to look for a `kind = "..."` field in the
// TOML to decide which variant to parse.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", deny_unknown_fields)]
#[serde(rename_all = "snake_case")] // "int" in TOML maps to the Int variant
pub enum StreamConfig {
    /// Integers in `[min, max)`.
    Int {
        name: String,
        min: i32,
        max: i32,
        /// Rejection sampling instead of the default modulo mapping.
        #[serde(default)]
        unbiased: bool,
    },
    /// Floats in `[min, max)`.
    Float { name: String, min: f32, max: f32 },
    /// Normally distributed noise, sampled through the stream's generator.
    Gaussian {
        name: String,
        mean: f64,
        std_dev: f64,
    },
    /// Points in the box `[-extents, extents)`; the sample is the point's
    /// distance from the origin.
    Scatter { name: String, extents: [f32; 3] },
    /// Shuffles `0..len` every step; the sample is the first element.
    /// Each step costs `len` swaps, so `len` is capped at [`MAX_SHUFFLE_LEN`].
    Shuffle { name: String, len: usize },
}

impl StreamConfig {
    pub fn name(&self) -> &str {
        match self {
            StreamConfig::Int { name, .. }
            | StreamConfig::Float { name, .. }
            | StreamConfig::Gaussian { name, .. }
            | StreamConfig::Scatter { name, .. }
            | StreamConfig::Shuffle { name, .. } => name,
        }
    }

    // Helper to get the string identifier used in reports
    pub fn get_kind_str(&self) -> &'static str {
        match self {
            StreamConfig::Int { .. } => "int",
            StreamConfig::Float { .. } => "float",
            StreamConfig::Gaussian { .. } => "gaussian",
            StreamConfig::Scatter { .. } => "scatter",
            StreamConfig::Shuffle { .. } => "shuffle",
        }
    }
}
