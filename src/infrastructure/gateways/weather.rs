//! Weather gateway (Yandex Weather v1 forecast).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::GatewayError;
use crate::domain::entities::{Coordinates, ForecastBundle, ForecastDay};
use crate::domain::traits::WeatherProvider;

const API_URL: &str = "https://api.weather.yandex.ru/v1/forecast";

pub struct WeatherGateway {
    api_key: String,
    client: Client,
}

impl WeatherGateway {
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }
}

#[derive(Deserialize)]
struct WeatherResponse {
    now_dt: String,
    info: Info,
    l10n: HashMap<String, String>,
    forecasts: Vec<Forecast>,
}

#[derive(Deserialize)]
struct Info {
    def_pressure_mm: i32,
}

#[derive(Deserialize)]
struct Forecast {
    parts: Parts,
}

#[derive(Deserialize)]
struct Parts {
    day_short: DayShort,
}

#[derive(Deserialize)]
struct DayShort {
    temp: f64,
    feels_like: f64,
    pressure_mm: i32,
    humidity: u8,
    condition: String,
}

#[async_trait]
impl WeatherProvider for WeatherGateway {
    async fn forecast(
        &self,
        coords: Coordinates,
        limit: Option<u8>,
    ) -> Result<ForecastBundle, GatewayError> {
        let mut query = vec![
            ("lat", coords.lat.to_string()),
            ("lon", coords.lng.to_string()),
            ("l10n", "true".to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let response = self
            .client
            .get(API_URL)
            .header("X-Yandex-API-Key", &self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: WeatherResponse = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        let days = data
            .forecasts
            .into_iter()
            .map(|f| ForecastDay {
                temperature: f.parts.day_short.temp,
                feels_like: f.parts.day_short.feels_like,
                humidity_percent: f.parts.day_short.humidity,
                pressure_mm: f.parts.day_short.pressure_mm,
                condition: f.parts.day_short.condition,
            })
            .collect();

        Ok(ForecastBundle {
            now_dt: data.now_dt,
            reference_pressure_mm: data.info.def_pressure_mm,
            conditions: data.l10n,
            days,
        })
    }
}
