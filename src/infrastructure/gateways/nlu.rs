//! NLU gateway (LUIS v2) - intent classification and entity extraction.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::GatewayError;
use crate::domain::entities::{Entity, Intent, RecognizedIntent};
use crate::domain::traits::IntentClassifier;

const API_BASE: &str = "https://westus.api.cognitive.microsoft.com/luis/v2.0/apps";

pub struct NluGateway {
    app_key: String,
    subscription_key: String,
    client: Client,
}

impl NluGateway {
    pub fn new(
        app_key: impl Into<String>,
        subscription_key: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            subscription_key: subscription_key.into(),
            client,
        }
    }
}

#[derive(Deserialize)]
struct NluResponse {
    #[serde(rename = "topScoringIntent")]
    top_scoring_intent: TopScoringIntent,
    entities: Vec<NluEntity>,
}

#[derive(Deserialize)]
struct TopScoringIntent {
    intent: String,
    score: f32,
}

#[derive(Deserialize)]
struct NluEntity {
    entity: String,
    #[serde(rename = "type")]
    kind: String,
}

#[async_trait]
impl IntentClassifier for NluGateway {
    async fn classify(&self, text: &str) -> Result<RecognizedIntent, GatewayError> {
        let url = format!("{}/{}", API_BASE, self.app_key);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("subscription-key", self.subscription_key.as_str()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: NluResponse = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        // Entity types outside City/Time are dropped; the router never
        // looks at them.
        let entities = data
            .entities
            .into_iter()
            .filter_map(|e| match e.kind.as_str() {
                "City" => Some(Entity::city(e.entity)),
                "Time" => Some(Entity::time(e.entity)),
                _ => None,
            })
            .collect();

        Ok(RecognizedIntent {
            intent: Intent::from_label(&data.top_scoring_intent.intent),
            confidence: data.top_scoring_intent.score,
            entities,
        })
    }
}
