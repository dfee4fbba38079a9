use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

use patrolgraph::api;
use patrolgraph::config::Config;
use patrolgraph::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphDB Contributors")]
enum Cli {
    /// Solve one road network and print the report
    Solve {
        /// Network file; reads stdin when omitted
        #[clap(short, long)]
        input: Option<PathBuf>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Solve every file in a directory and compare against expected reports
    Check {
        #[clap(long)]
        inputs: PathBuf,
        #[clap(long)]
        outputs: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli {
        Cli::Solve { config, .. } | Cli::Check { config, .. } => config.clone(),
    };
    let config = Config::load_or_default(config_path.as_ref())
        .context("Failed to load configuration")?;
    logging::init(&config).context("Failed to initialize logging")?;

    let result = run(cli, &config);
    logging::shutdown();
    result
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli {
        Cli::Solve { input, .. } => {
            let report = match input {
                Some(path) => api::solve_file(&path, config)
                    .with_context(|| format!("Failed to solve {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    io::stdin().read_to_string(&mut text)?;
                    api::solve(&text, config)?
                }
            };
            print!("{}", report);
        }
        Cli::Check {
            inputs, outputs, ..
        } => {
            let outcomes = api::check_cases(&inputs, &outputs, config)?;
            let failed = outcomes.iter().filter(|outcome| !outcome.passed).count();
            for outcome in &outcomes {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                match &outcome.error {
                    Some(error) => println!("{} {} ({})", status, outcome.input.display(), error),
                    None => println!("{} {}", status, outcome.input.display()),
                }
            }
            println!("{}/{} passed", outcomes.len() - failed, outcomes.len());
            if failed > 0 {
                bail!("{} case(s) failed", failed);
            }
        }
    }
    Ok(())
}
