// seedrand_sim/src/main.rs

use anyhow::{bail, Context, Error};
use clap::Parser;
use env_logger::Env;

use seedrand_sim::cli::{Cli, OutputFormat};
use seedrand_sim::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let scenarios = match &cli.scenario_dir {
        Some(dir) => {
            let found = discover_scenarios(dir)?;
            if found.is_empty() {
                bail!("no scenario files found under {}", dir.display());
            }
            found
        }
        None => vec![cli.scenario.clone()],
    };

    for path in &scenarios {
        let report = run_scenario(path, cli.overrides())
            .with_context(|| format!("scenario '{}' failed", path.display()))?;

        match cli.format {
            OutputFormat::Text => {
                println!("== {}", path.display());
                print!("{}", report);
            }
            OutputFormat::Toml => {
                println!("# {}", path.display());
                print!("{}", report.to_toml()?);
            }
        }
    }

    Ok(())
}
