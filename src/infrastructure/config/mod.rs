//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Bot configuration. One object built at startup and passed by
/// reference into each gateway client; no ambient globals.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub poll: PollConfig,
    pub telegram: TelegramConfig,
    pub keys: GatewayKeys,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PollConfig {
    /// Seconds between poll cycles.
    pub interval_seconds: u64,
    /// Explicit per-request HTTP timeout for every gateway call.
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub token: Option<String>,
}

/// API credentials for the external gateways, plain strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GatewayKeys {
    pub translate: String,
    pub nlu_app: String,
    pub nlu_subscription: String,
    pub geocoding: String,
    pub weather: String,
    pub image_search: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "pogoda-bot".to_string(),
            },
            poll: PollConfig {
                interval_seconds: 2,
                request_timeout_seconds: 30,
            },
            telegram: TelegramConfig { token: None },
            keys: GatewayKeys::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.into(), content)
            .map_err(|e| ConfigError::Parse(format!("Failed to write config: {}", e)))
    }

    /// Load from environment variables when no config file is present.
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(token) = std::env::var("BOT_TOKEN") {
            config.telegram.token = Some(token);
        }

        let env = |var: &str| std::env::var(var).unwrap_or_default();
        config.keys = GatewayKeys {
            translate: env("TRANSLATE_API_KEY"),
            nlu_app: env("NLU_APP_KEY"),
            nlu_subscription: env("NLU_SUBSCRIPTION_KEY"),
            geocoding: env("GEOCODING_API_KEY"),
            weather: env("WEATHER_API_KEY"),
            image_search: env("IMAGE_SEARCH_API_KEY"),
        };

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.bot.name, "pogoda-bot");
        assert_eq!(parsed.poll.interval_seconds, 2);
        assert!(parsed.telegram.token.is_none());
    }

    #[test]
    fn test_kebab_case_keys() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("interval-seconds"));
        assert!(yaml.contains("nlu-subscription"));
    }
}
