//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Rendering error: {0}")]
    Rendering(String),
}

/// Failures talking to an external collaborator
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed payload: {0}")]
    Schema(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}
