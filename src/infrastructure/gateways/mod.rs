//! HTTP gateway clients for the external collaborators.

pub mod geocode;
pub mod images;
pub mod nlu;
pub mod telegram;
pub mod translate;
pub mod weather;

pub use geocode::GeocodeGateway;
pub use images::ImageSearchGateway;
pub use nlu::NluGateway;
pub use telegram::TelegramGateway;
pub use translate::TranslateGateway;
pub use weather::WeatherGateway;

use crate::application::errors::GatewayError;

/// Reject non-success statuses before touching the body. The caller
/// gets the status and whatever the collaborator said.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
