use berea_config::ScriptureConfig;

use crate::error::ScriptureError;

/// Read-only translation registry built from configuration at startup
///
/// Resolves a translation abbreviation (`NIV`) or full edition name
/// (`New International Version`), case-insensitively, to the opaque
/// upstream bible identifier.
#[derive(Debug, Clone)]
pub struct TranslationRegistry {
    entries: Vec<Entry>,
    default_abbreviation: String,
}

#[derive(Debug, Clone)]
struct Entry {
    abbreviation: String,
    name: Option<String>,
    bible_id: String,
}

impl TranslationRegistry {
    /// Build the registry from scripture configuration
    ///
    /// # Errors
    ///
    /// Returns `ScriptureError::UnknownTranslation` if the configured
    /// default does not match any translation entry
    pub fn from_config(config: &ScriptureConfig) -> Result<Self, ScriptureError> {
        let entries: Vec<Entry> = config
            .translations
            .iter()
            .map(|(abbreviation, translation)| Entry {
                abbreviation: abbreviation.clone(),
                name: translation.name.clone(),
                bible_id: translation.id.clone(),
            })
            .collect();

        let registry = Self {
            entries,
            default_abbreviation: String::new(),
        };

        let default_abbreviation = registry
            .find(&config.default_translation)
            .map(|entry| entry.abbreviation.clone())
            .ok_or_else(|| ScriptureError::UnknownTranslation {
                translation: config.default_translation.clone(),
            })?;

        Ok(Self {
            default_abbreviation,
            ..registry
        })
    }

    fn find(&self, translation: &str) -> Option<&Entry> {
        let wanted = translation.trim();
        self.entries.iter().find(|entry| {
            entry.abbreviation.eq_ignore_ascii_case(wanted)
                || entry.name.as_deref().is_some_and(|name| name.eq_ignore_ascii_case(wanted))
        })
    }

    /// Whether the abbreviation or edition name is registered
    pub fn contains(&self, translation: &str) -> bool {
        self.find(translation).is_some()
    }

    /// Canonical abbreviation for an abbreviation or edition name
    pub fn canonical(&self, translation: &str) -> Option<&str> {
        self.find(translation).map(|entry| entry.abbreviation.as_str())
    }

    /// Upstream bible identifier for a translation
    ///
    /// # Errors
    ///
    /// Returns `ScriptureError::UnknownTranslation` if the translation is
    /// not registered
    pub fn bible_id(&self, translation: &str) -> Result<&str, ScriptureError> {
        self.find(translation)
            .map(|entry| entry.bible_id.as_str())
            .ok_or_else(|| ScriptureError::UnknownTranslation {
                translation: translation.to_owned(),
            })
    }

    /// Abbreviation used when a request names no translation
    pub fn default_translation(&self) -> &str {
        &self.default_abbreviation
    }

    /// Registered abbreviations, configuration order
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.abbreviation.as_str())
    }
}
