use crate::domain::model::Coordinate;
use crate::domain::ports::{ConfigProvider, Geocoder};
use crate::utils::error::{LocatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://dev.virtualearth.net/REST/v1/Locations";

/// Geocoder backed by the Bing Maps Locations API.
///
/// Asks for a single best match and takes the first resource of the first
/// resource set. There is no retry and no request timeout.
#[derive(Debug, Clone)]
pub struct BingGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl BingGeocoder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.geocoder_endpoint(), config.api_key())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationsResponse {
    resource_sets: Vec<ResourceSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSet {
    estimated_total: i64,
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    point: Option<Point>,
}

#[derive(Debug, Deserialize)]
struct Point {
    coordinates: Vec<f64>,
}

/// Decodes a Locations API body. Only `estimatedTotal <= 0` counts as a miss;
/// anything missing or malformed is an error.
fn parse_response(body: &str) -> Result<Option<Coordinate>> {
    let response: LocationsResponse = serde_json::from_str(body)?;
    top_match(response)
}

fn top_match(response: LocationsResponse) -> Result<Option<Coordinate>> {
    let Some(set) = response.resource_sets.into_iter().next() else {
        return Err(LocatorError::UnexpectedResponse {
            message: "response has no resource sets".to_string(),
        });
    };
    if set.estimated_total <= 0 {
        return Ok(None);
    }

    let point = set
        .resources
        .into_iter()
        .next()
        .and_then(|resource| resource.point)
        .ok_or_else(|| LocatorError::UnexpectedResponse {
            message: format!(
                "estimatedTotal is {} but no point was returned",
                set.estimated_total
            ),
        })?;

    match point.coordinates.as_slice() {
        [latitude, longitude, ..] => Ok(Some(Coordinate::new(*latitude, *longitude))),
        other => Err(LocatorError::UnexpectedResponse {
            message: format!("expected [latitude, longitude], got {:?}", other),
        }),
    }
}

#[async_trait]
impl Geocoder for BingGeocoder {
    async fn geocode(&self, location: &str) -> Result<Option<Coordinate>> {
        tracing::debug!("Making geocoding request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", location),
                ("maxResults", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        tracing::debug!("Geocoding API response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        parse_response(&body)
    }
}
