//! Image search gateway (Bing Image Search v7).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::GatewayError;
use crate::domain::traits::ImageSearch;

const API_URL: &str = "https://api.cognitive.microsoft.com/bing/v7.0/images/search";

pub struct ImageSearchGateway {
    api_key: String,
    client: Client,
}

impl ImageSearchGateway {
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    value: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "thumbnailUrl")]
    thumbnail_url: String,
}

#[async_trait]
impl ImageSearch for ImageSearchGateway {
    async fn search(&self, query: &str) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get(API_URL)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("count", "10"),
                ("offset", "0"),
                ("mkt", "en-us"),
                ("safeSearch", "Moderate"),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: SearchResponse = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        Ok(data.value.into_iter().map(|v| v.thumbnail_url).collect())
    }
}
