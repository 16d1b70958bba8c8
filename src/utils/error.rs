use crate::domain::model::QueryKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not locate that {kind} on a map. You may wish to verify that it is correct.")]
    LocationNotFound { kind: QueryKind },

    #[error("Unexpected geocoding response: {message}")]
    UnexpectedResponse { message: String },

    #[error("Could not find {}. Make sure it exists in the current directory.", .path.display())]
    CatalogNotFound { path: PathBuf },

    #[error("No store locations found in {source_name}.")]
    EmptyCatalog { source_name: String },

    #[error("{} is missing the required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Store '{store}' has an invalid coordinate value '{value}'")]
    InvalidCoordinate { store: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Interrupted")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Geocoding,
    Catalog,
    Configuration,
    Upstream,
    Interrupted,
}

impl LocatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LocatorError::LocationNotFound { .. } => ErrorCategory::Geocoding,
            LocatorError::ApiError(_)
            | LocatorError::SerializationError(_)
            | LocatorError::UnexpectedResponse { .. } => ErrorCategory::Upstream,
            LocatorError::CsvError(_)
            | LocatorError::IoError(_)
            | LocatorError::EmptyCatalog { .. }
            | LocatorError::MissingColumn { .. }
            | LocatorError::InvalidCoordinate { .. } => ErrorCategory::Catalog,
            LocatorError::CatalogNotFound { .. }
            | LocatorError::ConfigError { .. }
            | LocatorError::InvalidConfigValueError { .. }
            | LocatorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LocatorError::Interrupted => ErrorCategory::Interrupted,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
