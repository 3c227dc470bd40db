//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Gateways: HTTP clients for the external collaborators

pub mod config;
pub mod gateways;
