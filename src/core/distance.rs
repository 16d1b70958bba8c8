use crate::domain::model::{Coordinate, Units};

/// Great-circle distance between two points on a spherical earth.
pub fn haversine(from: Coordinate, to: Coordinate, units: Units) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.min(1.0).sqrt().asin();

    c * units.earth_radius()
}
