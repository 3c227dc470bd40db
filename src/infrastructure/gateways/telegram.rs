//! Telegram gateway - the chat platform adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::GatewayError;
use crate::domain::entities::IncomingMessage;
use crate::domain::traits::ChatPlatform;

/// Telegram API base URL
const API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

pub struct TelegramGateway {
    token: String,
    client: Client,
}

impl TelegramGateway {
    pub fn new(token: impl Into<String>, client: Client) -> Self {
        Self {
            token: token.into(),
            client,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", API_BASE, self.token, method)
    }
}

#[async_trait]
impl ChatPlatform for TelegramGateway {
    async fn poll(&self, cursor: i64) -> Result<Vec<IncomingMessage>, GatewayError> {
        #[derive(Serialize)]
        struct GetUpdatesRequest {
            offset: i64,
            allowed_updates: Vec<String>,
        }

        #[derive(Deserialize)]
        struct Response {
            result: Vec<Update>,
        }

        let request = GetUpdatesRequest {
            offset: cursor,
            allowed_updates: vec!["message".to_string()],
        };

        let response = self
            .client
            .post(self.api_url("getUpdates"))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let data: Response = super::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::Schema(e.to_string()))?;

        // Non-text updates still advance the cursor, they just carry
        // nothing to route.
        let messages = data
            .result
            .into_iter()
            .filter_map(|update| {
                let message = update.message?;
                let text = message.text?;
                Some(IncomingMessage::new(
                    message.chat.id.to_string(),
                    text,
                    update.update_id,
                ))
            })
            .collect();

        Ok(messages)
    }

    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), GatewayError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: &'a str,
            text: &'a str,
        }

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        super::check_status(response).await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: &str, photo_url: &str) -> Result<(), GatewayError> {
        #[derive(Serialize)]
        struct SendPhotoRequest<'a> {
            chat_id: &'a str,
            photo: &'a str,
        }

        let response = self
            .client
            .post(self.api_url("sendPhoto"))
            .json(&SendPhotoRequest {
                chat_id,
                photo: photo_url,
            })
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        super::check_status(response).await?;
        Ok(())
    }
}
