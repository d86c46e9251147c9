mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use helpers::{init_logging, print_candidates, print_selection, print_table};
use image_selector::{EnvSelector, Params, ProviderConfig, Selector, candidate_keys};

const DEFAULT_ENV_PREFIX: &str = "TRAVIS_WORKER_DOCKER_";

/// Resolve the image a build would receive from `IMAGE_*` settings.
#[derive(Debug, Parser)]
#[command(name = "image-select", version)]
struct Cli {
    /// Distribution requested by the build (e.g. trusty)
    #[arg(long, default_value = "")]
    dist: String,

    /// Group requested by the build (e.g. edge, power-small)
    #[arg(long, default_value = "")]
    group: String,

    /// Operating system requested by the build (e.g. linux)
    #[arg(long, default_value = "")]
    os: String,

    /// Read settings from environment variables starting with this prefix
    #[arg(long, default_value = DEFAULT_ENV_PREFIX)]
    env_prefix: String,

    /// Read settings from a JSON file instead of the environment
    #[arg(long, conflicts_with = "env_prefix")]
    config: Option<PathBuf>,

    /// Print the candidate keys instead of selecting
    #[arg(long, conflicts_with = "table")]
    candidates: bool,

    /// Print the normalized lookup table instead of selecting
    #[arg(long)]
    table: bool,

    /// Print the selection as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<ProviderConfig> {
    match &cli.config {
        Some(path) => ProviderConfig::from_file(path).with_context(|| format!("load config from {}", path.display())),
        None => Ok(ProviderConfig::from_env(&cli.env_prefix)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let params = Params::new(cli.dist.as_str(), cli.group.as_str(), cli.os.as_str());

    if cli.candidates {
        print_candidates(&candidate_keys(&params));
        return Ok(());
    }

    let config = load_config(&cli)?;
    tracing::debug!(settings = config.len(), "loaded provider config");

    let selector = EnvSelector::new(&config);

    if cli.table {
        print_table(selector.lookup());
        return Ok(());
    }

    let image = Selector::select(&selector, &params)
        .await
        .with_context(|| format!("select image for {params:?}"))?;

    print_selection(&params, &image, cli.json)
}
