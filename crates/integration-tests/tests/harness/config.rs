//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use berea_config::{ChatConfig, Config, HealthConfig, ScriptureConfig, ServerConfig, TranslationConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        let translations = [
            ("KJV", "kjv-id", "King James Version"),
            ("NIV", "niv-id", "New International Version"),
        ]
        .into_iter()
        .map(|(abbreviation, id, name)| {
            (
                abbreviation.to_owned(),
                TranslationConfig {
                    id: id.to_owned(),
                    name: Some(name.to_owned()),
                },
            )
        })
        .collect();

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                chat: ChatConfig {
                    api_key: SecretString::from("test-key"),
                    base_url: None,
                    model: "mock-model-1".to_owned(),
                    temperature: 0.0,
                    max_tokens: 100,
                },
                scripture: ScriptureConfig {
                    api_key: SecretString::from("test-bible-key"),
                    base_url: None,
                    default_translation: "KJV".to_owned(),
                    translations,
                },
                telemetry: None,
            },
        }
    }

    /// Point the chat client at a mock completion backend
    pub fn with_chat_base_url(mut self, base_url: &str) -> Self {
        self.config.chat.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the scripture client at a mock lookup backend
    pub fn with_scripture_base_url(mut self, base_url: &str) -> Self {
        self.config.scripture.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
