#![allow(clippy::must_use_candidate)]

pub mod chat;
mod env;
pub mod health;
mod loader;
pub mod scripture;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use chat::ChatConfig;
pub use health::HealthConfig;
pub use scripture::{ScriptureConfig, TranslationConfig};
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;

/// Top-level Berea configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat completion provider configuration
    pub chat: ChatConfig,
    /// Scripture lookup configuration
    pub scripture: ScriptureConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
