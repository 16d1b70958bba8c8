pub mod distance;
pub mod locator;
pub mod nearest;

pub use crate::domain::model::{Coordinate, NearestStore, StoreRecord};
pub use crate::domain::ports::{ConfigProvider, Geocoder, StoreCatalog};
pub use crate::utils::error::Result;
