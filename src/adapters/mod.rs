// Adapters layer: concrete implementations of the domain ports.

pub mod bing;
pub mod csv_catalog;

pub use bing::BingGeocoder;
pub use csv_catalog::CsvCatalog;
