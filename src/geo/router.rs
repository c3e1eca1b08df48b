//! Google Maps client implementing the provider traits
//!
//! Durations come from the Distance Matrix endpoint, the device position
//! from the Geolocation endpoint. Both are plain JSON over HTTPS.

use crate::error::{CommuterError, Result};
use crate::geo::types::{Durationer, Locator, TravelMode};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";
const GEOLOCATE_URL: &str = "https://www.googleapis.com/geolocation/v1/geolocate";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("commuter/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    duration: Option<DurationValue>,
}

#[derive(Debug, Deserialize)]
struct DurationValue {
    /// Seconds
    value: u64,
}

#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    location: GeolocationPoint,
}

#[derive(Debug, Deserialize)]
struct GeolocationPoint {
    lat: f64,
    lng: f64,
}

/// Google Maps API client. Cheap to clone; the underlying HTTP client
/// is shared.
#[derive(Debug, Clone)]
pub struct MapsRouter {
    client: Client,
    api_key: String,
}

impl MapsRouter {
    /// Create a router for the given API key. A blank key is rejected
    /// here so that resolution fails before any command is constructed.
    pub fn new(api_key: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(CommuterError::provider("API key must not be empty"));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CommuterError::provider_with("failed to create HTTP client", e))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }
}

impl Durationer for MapsRouter {
    fn duration(&self, from: &str, to: &str, mode: TravelMode) -> Result<Duration> {
        debug!("requesting {mode} duration from {from:?} to {to:?}");

        let response = self
            .client
            .get(DISTANCE_MATRIX_URL)
            .query(&[
                ("origins", from),
                ("destinations", to),
                ("mode", mode.api_mode()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| CommuterError::provider_with("distance matrix request failed", e))?;

        let body: DistanceMatrixResponse = response
            .json()
            .map_err(|e| CommuterError::provider_with("malformed distance matrix response", e))?;

        if body.status != "OK" {
            let detail = body.error_message.unwrap_or_default();
            return Err(CommuterError::provider(format!(
                "distance matrix returned {}: {detail}",
                body.status
            )));
        }

        let element = body
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(|| CommuterError::provider("empty distance matrix response"))?;

        if element.status != "OK" {
            return Err(CommuterError::provider(format!(
                "no {mode} route between {from:?} and {to:?} ({})",
                element.status
            )));
        }

        let seconds = element
            .duration
            .as_ref()
            .ok_or_else(|| CommuterError::provider("distance matrix element has no duration"))?
            .value;

        Ok(Duration::from_secs(seconds))
    }
}

impl Locator for MapsRouter {
    fn current_location(&self) -> Result<(f64, f64)> {
        debug!("requesting current location");

        let response = self
            .client
            .post(GEOLOCATE_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({ "considerIp": true }))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| CommuterError::provider_with("geolocation request failed", e))?;

        let body: GeolocationResponse = response
            .json()
            .map_err(|e| CommuterError::provider_with("malformed geolocation response", e))?;

        Ok((body.location.lat, body.location.lng))
    }
}
