use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion fails, TOML
    /// parsing fails, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no translations are configured, the default
    /// translation does not resolve, or an API key is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.chat.api_key.expose_secret().is_empty() {
            anyhow::bail!("chat.api_key must not be empty");
        }

        if self.scripture.api_key.expose_secret().is_empty() {
            anyhow::bail!("scripture.api_key must not be empty");
        }

        if self.scripture.translations.is_empty() {
            anyhow::bail!("at least one translation must be configured under [scripture.translations]");
        }

        for (abbreviation, translation) in &self.scripture.translations {
            if translation.id.is_empty() {
                anyhow::bail!("translation '{abbreviation}' has an empty id");
            }
        }

        let default = self.scripture.default_translation.as_str();
        let default_known = self.scripture.translations.iter().any(|(abbreviation, translation)| {
            abbreviation.eq_ignore_ascii_case(default)
                || translation
                    .name
                    .as_deref()
                    .is_some_and(|name| name.eq_ignore_ascii_case(default))
        });

        if !default_known {
            anyhow::bail!("default_translation '{default}' does not match any configured translation");
        }

        Ok(())
    }
}
