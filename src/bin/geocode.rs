use anyhow::{bail, Result};
use clap::Parser;
use find_store::config::toml_config::TomlConfig;
use find_store::config::{LocatorConfig, Overrides};
use find_store::domain::ports::Geocoder;
use find_store::utils::logger;
use find_store::utils::validation::Validate;
use find_store::BingGeocoder;
use std::path::PathBuf;

/// Resolve a location with the configured geocoder and print the raw
/// coordinate. Handy for checking an API key or endpoint.
#[derive(Parser)]
#[command(name = "geocode")]
#[command(about = "Geocode a single location string")]
struct Args {
    location: String,

    #[arg(long, env = "FIND_STORE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "FIND_STORE_API_ENDPOINT")]
    api_endpoint: Option<String>,

    #[arg(long, env = "FIND_STORE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let file = args.config.as_ref().map(TomlConfig::from_file).transpose()?;
    let config = LocatorConfig::resolve(
        file.as_ref(),
        Overrides {
            endpoint: args.api_endpoint,
            api_key: args.api_key,
            data_file: None,
        },
    );
    config.validate()?;

    let geocoder = BingGeocoder::from_config(&config);
    match geocoder.geocode(&args.location).await? {
        Some(point) => println!("{}", point),
        None => bail!("no match for '{}'", args.location),
    }

    Ok(())
}
