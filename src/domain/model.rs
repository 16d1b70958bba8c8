use crate::utils::error::{LocatorError, Result};
use std::fmt;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Units {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "mi"))]
    Miles,
    #[cfg_attr(feature = "cli", value(name = "km"))]
    Kilometers,
}

impl Units {
    /// Mean earth radius in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            Units::Miles => 3959.0,
            Units::Kilometers => 6371.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Units::Miles => "mi",
            Units::Kilometers => "km",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Address,
    ZipCode,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Address => f.write_str("address"),
            QueryKind::ZipCode => f.write_str("zip code"),
        }
    }
}

/// What the user asked for. Both forms go to the geocoder unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Address(String),
    ZipCode(String),
}

impl Query {
    pub fn text(&self) -> &str {
        match self {
            Query::Address(text) | Query::ZipCode(text) => text,
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Address(_) => QueryKind::Address,
            Query::ZipCode(_) => QueryKind::ZipCode,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone)]
pub struct LocateRequest {
    pub query: Query,
    pub units: Units,
    pub output: OutputFormat,
}

/// One row of the store catalog.
///
/// Latitude and longitude stay as text; see [`StoreRecord::coordinate`].
/// `columns` holds every cell of the row, keyed by header, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRecord {
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: String,
    pub longitude: String,
    pub columns: Vec<(String, String)>,
}

impl StoreRecord {
    pub const NAME: &'static str = "Store Name";
    pub const LOCATION: &'static str = "Store Location";
    pub const ADDRESS: &'static str = "Address";
    pub const CITY: &'static str = "City";
    pub const STATE: &'static str = "State";
    pub const ZIP_CODE: &'static str = "Zip Code";
    pub const LATITUDE: &'static str = "Latitude";
    pub const LONGITUDE: &'static str = "Longitude";

    pub const REQUIRED_COLUMNS: [&'static str; 8] = [
        Self::NAME,
        Self::LOCATION,
        Self::ADDRESS,
        Self::CITY,
        Self::STATE,
        Self::ZIP_CODE,
        Self::LATITUDE,
        Self::LONGITUDE,
    ];

    /// Builds a record whose columns are exactly the required ones.
    pub fn from_fields(
        name: &str,
        location: &str,
        address: &str,
        city: &str,
        state: &str,
        zip_code: &str,
        latitude: &str,
        longitude: &str,
    ) -> Self {
        let values = [name, location, address, city, state, zip_code, latitude, longitude];
        let columns = Self::REQUIRED_COLUMNS
            .iter()
            .zip(values.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        Self {
            name: name.to_string(),
            location: location.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            columns,
        }
    }

    pub fn coordinate(&self) -> Result<Coordinate> {
        let latitude = parse_degrees(&self.name, &self.latitude)?;
        let longitude = parse_degrees(&self.name, &self.longitude)?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

fn parse_degrees(store: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        LocatorError::InvalidCoordinate {
            store: store.to_string(),
            value: value.to_string(),
        }
    })
}

/// The winning store and its distance from the query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStore {
    pub store: StoreRecord,
    pub distance: f64,
    pub units: Units,
}
