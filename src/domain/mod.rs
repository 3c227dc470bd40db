//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Messages, recognized intents, forecast payloads
//! - Traits: Abstractions for the external gateways

pub mod entities;
pub mod traits;
