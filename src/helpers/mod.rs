use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use image_selector::{LookupTable, Params};

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "image_selector=debug,image_select=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[derive(Debug, Serialize)]
struct Selection<'a> {
    dist: &'a str,
    group: &'a str,
    os: &'a str,
    image: &'a str,
}

/// Render the final selection, either as a summary block or as JSON.
pub fn print_selection(params: &Params, image: &str, json: bool) -> Result<()> {
    if json {
        let selection = Selection {
            dist: &params.dist,
            group: &params.group,
            os: &params.os,
            image,
        };
        println!("{}", serde_json::to_string(&selection).context("serialize selection")?);
        return Ok(());
    }

    println!("=== Selection ===");
    println!("Dist:   {}", or_unset(&params.dist));
    println!("Group:  {}", or_unset(&params.group));
    println!("OS:     {}", or_unset(&params.os));
    println!("Image:  {image}");
    Ok(())
}

pub fn print_candidates(keys: &[String]) {
    for (idx, key) in keys.iter().enumerate() {
        println!("{idx:>2}  {}", if key.is_empty() { "<empty>" } else { key.as_str() });
    }
}

pub fn print_table(table: &LookupTable) {
    for (key, image) in table.sorted() {
        println!("{key} = {image}");
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "<unset>" } else { value }
}
