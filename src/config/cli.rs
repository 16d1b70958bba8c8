use crate::config::toml_config::TomlConfig;
use crate::config::{LocatorConfig, Overrides};
use crate::domain::model::{LocateRequest, OutputFormat, Query, Units};
use crate::utils::error::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "find-store")]
#[command(about = "Find the store nearest to an address or zip code")]
#[command(group(ArgGroup::new("location").required(true).args(["address", "zip"])))]
pub struct CliConfig {
    /// Find the nearest store to this address
    #[arg(long)]
    pub address: Option<String>,

    /// Find the nearest store to this zip code
    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, value_enum, default_value_t = Units::Miles)]
    pub units: Units,

    /// TOML file with geocoder and catalog settings
    #[arg(long, env = "FIND_STORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "FIND_STORE_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    #[arg(long, env = "FIND_STORE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Store catalog CSV [default: store-locations.csv]
    #[arg(long, env = "FIND_STORE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn request(&self) -> LocateRequest {
        let query = match (&self.address, &self.zip) {
            (Some(address), _) => Query::Address(address.clone()),
            (None, Some(zip)) => Query::ZipCode(zip.clone()),
            // clap enforces exactly one of the pair
            (None, None) => Query::ZipCode(String::new()),
        };

        LocateRequest {
            query,
            units: self.units,
            output: self.output,
        }
    }

    pub fn locator_config(&self) -> Result<LocatorConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let overrides = Overrides {
            endpoint: self.api_endpoint.clone(),
            api_key: self.api_key.clone(),
            data_file: self.data_file.clone(),
        };

        Ok(LocatorConfig::resolve(file.as_ref(), overrides))
    }
}
