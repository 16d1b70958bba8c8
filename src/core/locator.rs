use crate::core::nearest::find_nearest;
use crate::domain::model::{NearestStore, Query, Units};
use crate::domain::ports::{Geocoder, StoreCatalog};
use crate::utils::error::{LocatorError, Result};

/// Runs one lookup: geocode the query, load the catalog, scan for the
/// nearest store.
pub struct StoreLocator<G: Geocoder, C: StoreCatalog> {
    geocoder: G,
    catalog: C,
}

impl<G: Geocoder, C: StoreCatalog> StoreLocator<G, C> {
    pub fn new(geocoder: G, catalog: C) -> Self {
        Self { geocoder, catalog }
    }

    pub async fn locate(&self, query: &Query, units: Units) -> Result<NearestStore> {
        tracing::debug!("Geocoding {} '{}'", query.kind(), query);
        let origin = self
            .geocoder
            .geocode(query.text())
            .await?
            .ok_or(LocatorError::LocationNotFound { kind: query.kind() })?;
        tracing::debug!("Query resolved to ({})", origin);

        let stores = self.catalog.load()?;
        tracing::debug!(
            "Loaded {} stores from {}",
            stores.len(),
            self.catalog.source_name()
        );

        let (store, distance) = find_nearest(origin, &stores, units)?.ok_or_else(|| {
            LocatorError::EmptyCatalog {
                source_name: self.catalog.source_name(),
            }
        })?;
        tracing::debug!("Nearest store is '{}' at {:.4} {}", store.name, distance, units);

        Ok(NearestStore {
            store: store.clone(),
            distance,
            units,
        })
    }
}
