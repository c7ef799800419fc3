use std::sync::Arc;

use berea_chat::ChatClient;
use berea_config::Config;
use berea_scripture::{FetchedVerse, ScriptureClient, ScriptureError, TranslationRegistry, VerseReference};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    chat: ChatClient,
    scripture: ScriptureClient,
    translations: TranslationRegistry,
}

impl AppState {
    /// Build application state from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a client cannot be constructed or the
    /// translation registry is inconsistent
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let translations = TranslationRegistry::from_config(&config.scripture)?;
        let scripture = ScriptureClient::new(&config.scripture)?;
        let chat = ChatClient::new(&config.chat)?;

        Ok(Self {
            inner: Arc::new(Inner {
                chat,
                scripture,
                translations,
            }),
        })
    }

    pub fn chat(&self) -> &ChatClient {
        &self.inner.chat
    }

    pub fn scripture(&self) -> &ScriptureClient {
        &self.inner.scripture
    }

    pub fn translations(&self) -> &TranslationRegistry {
        &self.inner.translations
    }

    /// Resolve the reference's translation (or the default) and fetch
    /// the verse
    ///
    /// # Errors
    ///
    /// Returns any `ScriptureError` from resolution or the fetch
    pub async fn lookup(&self, reference: &VerseReference) -> Result<(String, FetchedVerse), ScriptureError> {
        let translations = self.translations();
        let abbreviation = reference
            .translation
            .as_deref()
            .unwrap_or_else(|| translations.default_translation());

        let bible_id = translations.bible_id(abbreviation)?;
        let verse = self.scripture().fetch(reference, bible_id).await?;

        Ok((abbreviation.to_owned(), verse))
    }
}
