use crate::domain::model::{Coordinate, StoreRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Resolves free-form location text to a point.
///
/// `Ok(None)` means the provider answered but found no match; transport and
/// response errors come back as `Err`.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, location: &str) -> Result<Option<Coordinate>>;
}

/// Source of store records. Implementations return at least one record or
/// an error.
pub trait StoreCatalog: Send + Sync {
    fn load(&self) -> Result<Vec<StoreRecord>>;

    /// Human-readable name of the backing source, used in messages.
    fn source_name(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn geocoder_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn data_file(&self) -> &Path;
}
