mod aggregate;
mod normalize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pasar_core::{AppConfig, ConfigError, Vendor};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pasar-cli")]
#[command(about = "Marketplace vendor integration command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a raw vendor record array into canonical products
    Normalize {
        /// Vendor the records come from (vendor_a, vendor_b, vendor_c)
        vendor_type: Vendor,

        /// Read the JSON array from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Fetch every configured vendor feed and print the merged catalog
    Aggregate {
        /// Use the built-in Vendor C sample instead of fetching Vendor C
        #[arg(long)]
        sample: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    // Only `aggregate` needs the config, so a load error is deferred to it.
    let config = pasar_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let document = run(cli.command, config).await?;

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

async fn run(command: Commands, config: Result<AppConfig, ConfigError>) -> anyhow::Result<Value> {
    match command {
        Commands::Normalize { vendor_type, input } => {
            let raw = normalize::read_input(input.as_deref())?;
            normalize::normalize_document(vendor_type, &raw)
        }
        Commands::Aggregate { sample } => aggregate::run_aggregate(&config?, sample).await,
    }
}

#[cfg(test)]
mod tests;
