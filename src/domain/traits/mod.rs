//! Domain traits - Abstractions for the external gateways

pub mod gateways;

pub use gateways::{
    ChatPlatform, Geocoder, ImageSearch, IntentClassifier, Translator, WeatherProvider,
};
