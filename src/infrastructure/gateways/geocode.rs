//! Geocoding gateway (Google Geocoding API).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::GatewayError;
use crate::domain::entities::Coordinates;
use crate::domain::traits::Geocoder;

const API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

pub struct GeocodeGateway {
    api_key: String,
    client: Client,
}

impl GeocodeGateway {
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[async_trait]
impl Geocoder for GeocodeGateway {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GatewayError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: GeocodeResponse = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        // An empty result list is the expected not-found signal.
        Ok(data.results.into_iter().next().map(|r| Coordinates {
            lat: r.geometry.location.lat,
            lng: r.geometry.location.lng,
        }))
    }
}
