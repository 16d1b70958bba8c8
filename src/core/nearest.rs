use crate::core::distance::haversine;
use crate::domain::model::{Coordinate, StoreRecord, Units};
use crate::utils::error::Result;

/// Linear scan for the record closest to `origin`.
///
/// Returns `Ok(None)` for an empty slice. A later record replaces the current
/// best only when strictly closer, so the earliest record wins exact ties.
pub fn find_nearest<'a>(
    origin: Coordinate,
    stores: &'a [StoreRecord],
    units: Units,
) -> Result<Option<(&'a StoreRecord, f64)>> {
    let mut best: Option<(&StoreRecord, f64)> = None;

    for store in stores {
        let distance = haversine(origin, store.coordinate()?, units);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((store, distance)),
        }
    }

    Ok(best)
}
