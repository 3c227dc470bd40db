use async_trait::async_trait;

use crate::application::errors::GatewayError;
use crate::domain::entities::{Coordinates, ForecastBundle, IncomingMessage, RecognizedIntent};

/// Chat platform adapter - the only inbound surface of the bot.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Fetch pending text messages at or after `cursor`, in arrival order.
    async fn poll(&self, cursor: i64) -> Result<Vec<IncomingMessage>, GatewayError>;

    /// Send a plain text message to a chat.
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), GatewayError>;

    /// Send a photo by URL to a chat.
    async fn send_photo(&self, chat_id: &str, photo_url: &str) -> Result<(), GatewayError>;
}

/// Machine translation gateway. The target language is fixed to English:
/// the bot accepts any input language but always replies in English.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, GatewayError>;
}

/// NLU gateway - assigns an intent and extracts typed entities.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<RecognizedIntent, GatewayError>;
}

/// Geocoding gateway. `Ok(None)` is the designed location-not-found
/// signal, not an error.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GatewayError>;
}

/// Weather forecast gateway.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch a forecast for the coordinates. `limit` selects how many
    /// days the response covers (1 = today only); `None` leaves the
    /// provider's default horizon.
    async fn forecast(
        &self,
        coords: Coordinates,
        limit: Option<u8>,
    ) -> Result<ForecastBundle, GatewayError>;
}

/// Image search gateway - returns ranked thumbnail URLs.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>, GatewayError>;
}
