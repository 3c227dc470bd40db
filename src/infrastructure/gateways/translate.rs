//! Translation gateway (Yandex Translate v1.5).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::GatewayError;
use crate::domain::traits::Translator;

const API_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json/translate";

/// Target language is pinned to English: the bot reads any language
/// but always answers in English.
const TARGET_LANG: &str = "en";

pub struct TranslateGateway {
    api_key: String,
    client: Client,
}

impl TranslateGateway {
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }
}

#[async_trait]
impl Translator for TranslateGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        #[derive(Deserialize)]
        struct Response {
            text: Vec<String>,
        }

        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("text", text),
                ("lang", TARGET_LANG),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: Response = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        data.text
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Schema("empty translation result".to_string()))
    }
}
