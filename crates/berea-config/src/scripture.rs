use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Scripture lookup API configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptureConfig {
    /// API key for the scripture endpoint
    pub api_key: SecretString,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Translation applied when a request names none
    pub default_translation: String,
    /// Supported translations keyed by abbreviation (e.g. `NIV`)
    #[serde(default)]
    pub translations: IndexMap<String, TranslationConfig>,
}

/// A single Bible translation edition
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    /// Opaque upstream identifier for this edition
    pub id: String,
    /// Full edition name (e.g. `New International Version`), also
    /// accepted when requests select a translation
    #[serde(default)]
    pub name: Option<String>,
}
