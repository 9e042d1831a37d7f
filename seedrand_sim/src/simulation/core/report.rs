// seedrand_sim/src/simulation/core/report.rs

use std::fmt::{self, Write as _};

use serde::Serialize;

use super::streams::SampleStream;

/// Everything a run produced, in stream order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub seed: i32,
    pub steps: u32,
    pub streams: Vec<StreamSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamSummary {
    pub name: String,
    pub kind: String,
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// The first samples drawn, in order.
    pub preview: Vec<f64>,
}

impl From<&SampleStream> for StreamSummary {
    fn from(stream: &SampleStream) -> Self {
        let stats = stream.stats();
        Self {
            name: stream.name().to_string(),
            kind: stream.kind().to_string(),
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            preview: stream.preview().to_vec(),
        }
    }
}

impl Report {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn stream(&self, name: &str) -> Option<&StreamSummary> {
        self.streams.iter().find(|s| s.name == name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed {} | {} steps per stream", self.seed, self.steps)?;
        writeln!(
            f,
            "{:<16} {:<9} {:>12} {:>12} {:>12}  preview",
            "stream", "kind", "min", "max", "mean"
        )?;
        for s in &self.streams {
            let mut preview = String::new();
            for (i, sample) in s.preview.iter().enumerate() {
                if i > 0 {
                    preview.push_str(", ");
                }
                write!(preview, "{:.4}", sample)?;
            }
            writeln!(
                f,
                "{:<16} {:<9} {:>12.4} {:>12.4} {:>12.4}  [{}]",
                s.name, s.kind, s.min, s.max, s.mean, preview
            )?;
        }
        Ok(())
    }
}
