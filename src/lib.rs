pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BingGeocoder, CsvCatalog};
pub use config::LocatorConfig;
pub use core::locator::StoreLocator;
pub use domain::model::{Coordinate, NearestStore, OutputFormat, Query, StoreRecord, Units};
pub use utils::error::{LocatorError, Result};
