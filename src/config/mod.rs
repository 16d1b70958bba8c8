#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::bing::DEFAULT_ENDPOINT;
use crate::adapters::csv_catalog::DEFAULT_DATA_FILE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, validate_url, Validate,
};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

/// Settings handed to the geocoder and catalog constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub data_file: PathBuf,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Values given on the command line or through the environment. Each one
/// overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub data_file: Option<PathBuf>,
}

impl LocatorConfig {
    /// Layers defaults, then the TOML file, then overrides.
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(endpoint) = file.endpoint() {
                config.endpoint = endpoint.to_string();
            }
            if let Some(api_key) = file.api_key() {
                config.api_key = Some(api_key.to_string());
            }
            if let Some(path) = file.data_file() {
                config.data_file = path.to_path_buf();
            }
        }

        if let Some(endpoint) = overrides.endpoint {
            config.endpoint = endpoint;
        }
        if overrides.api_key.is_some() {
            config.api_key = overrides.api_key;
        }
        if let Some(path) = overrides.data_file {
            config.data_file = path;
        }

        config
    }
}

impl ConfigProvider for LocatorConfig {
    fn geocoder_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Validate for LocatorConfig {
    fn validate(&self) -> Result<()> {
        validate_url("geocoder endpoint", &self.endpoint)?;
        let api_key = validate_required_field("geocoder API key", &self.api_key)?;
        validate_non_empty_string("geocoder API key", api_key)?;
        validate_path("data file", &self.data_file.to_string_lossy())?;
        Ok(())
    }
}
