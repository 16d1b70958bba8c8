use crate::utils::error::{LocatorError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional on-disk configuration.
///
/// ```toml
/// [geocoder]
/// endpoint = "https://dev.virtualearth.net/REST/v1/Locations"
/// api_key = "${BING_MAPS_API_KEY}"
///
/// [catalog]
/// path = "store-locations.csv"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub geocoder: Option<GeocoderConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocoderConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LocatorError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses after expanding `${NAME}` placeholders from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = expand_placeholders(content)?;

        toml::from_str(&expanded).map_err(|e| LocatorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.geocoder.as_ref()?.endpoint.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.geocoder.as_ref()?.api_key.as_deref()
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.catalog.as_ref()?.path.as_deref()
    }
}

/// Unset variables are left in place so validation can name them.
fn expand_placeholders(content: &str) -> Result<String> {
    let placeholder = Regex::new(r"\$\{(?P<name>[A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
        LocatorError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        }
    })?;

    let expanded = placeholder.replace_all(content, |caps: &Captures| {
        std::env::var(&caps["name"]).unwrap_or_else(|_| caps[0].to_string())
    });

    Ok(expanded.into_owned())
}
