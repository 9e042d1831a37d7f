use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::RunOverrides;

/// seedrand: deterministic xorshift sample streams, driven by TOML scenarios.
///
/// This struct defines the command-line arguments accepted by the
/// `seedrand_sim` binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(
        short,
        long,
        default_value = "assets/scenarios/00_dice_and_debris.toml",
        conflicts_with = "scenario_dir"
    )]
    pub scenario: PathBuf,

    /// Run every `.toml` scenario under this directory instead of `--scenario`.
    #[arg(long)]
    pub scenario_dir: Option<PathBuf>,

    /// Override the scenario's seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Override the number of steps per stream.
    #[arg(long)]
    pub steps: Option<u32>,

    /// How to print each report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Toml,
}

impl Cli {
    pub fn overrides(&self) -> RunOverrides {
        RunOverrides {
            seed: self.seed,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bundled_scenario() {
        let cli = Cli::try_parse_from(["seedrand_sim"]).unwrap();
        assert_eq!(
            cli.scenario,
            PathBuf::from("assets/scenarios/00_dice_and_debris.toml")
        );
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.overrides(), RunOverrides::default());
    }

    #[test]
    fn scenario_and_scenario_dir_conflict() {
        let dir_only = Cli::try_parse_from(["seedrand_sim", "--scenario-dir", "assets/scenarios"])
            .unwrap();
        assert_eq!(dir_only.scenario_dir, Some(PathBuf::from("assets/scenarios")));

        let both = Cli::try_parse_from([
            "seedrand_sim",
            "--scenario",
            "a.toml",
            "--scenario-dir",
            "assets/scenarios",
        ])
        .unwrap_err();
        assert_eq!(both.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn accepts_negative_seeds_and_toml_output() {
        let cli = Cli::try_parse_from([
            "seedrand_sim",
            "--seed",
            "-42",
            "--steps",
            "5",
            "--format",
            "toml",
        ])
        .unwrap();
        assert_eq!(
            cli.overrides(),
            RunOverrides {
                seed: Some(-42),
                steps: Some(5),
            }
        );
        assert_eq!(cli.format, OutputFormat::Toml);
    }
}
