//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Timing: Natural-language time phrase resolution
//! - Phrases: Fixed reply texts and the uniform pick helper
//! - Rendering: Forecast-to-text composition
//! - Router: Intent dispatch
//! - Relay: The polling loop

pub mod errors;
pub mod phrases;
pub mod relay;
pub mod rendering;
pub mod router;
pub mod timing;
