//! Daily encouragement verse endpoint

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use berea_chat::prompt;
use berea_scripture::{ScriptureError, VerseReference, VerseSpan, books};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::error_response;
use crate::state::AppState;

/// Curated references the daily verse is drawn from
const DAILY_REFERENCES: &[(&str, u32, u32)] = &[
    ("John", 3, 16),
    ("Psalms", 23, 1),
    ("Romans", 8, 28),
    ("Proverbs", 3, 5),
    ("Matthew", 5, 9),
    ("Philippians", 4, 13),
    ("Genesis", 1, 1),
    ("Isaiah", 40, 31),
    ("1 Corinthians", 13, 4),
    ("James", 1, 5),
];

/// Body of `POST /v1/daily-verse`
#[derive(Debug, Default, Deserialize)]
pub struct DailyVerseRequest {
    /// Preferred translation; the configured default applies when absent
    #[serde(default)]
    pub translation: Option<String>,
}

/// Reply for `POST /v1/daily-verse`
#[derive(Debug, Serialize)]
pub struct DailyVerseResponse {
    /// Display reference of the selected verse
    pub reference: String,
    /// Translation abbreviation the verse was fetched in
    pub translation: String,
    /// Verse text
    pub verse: String,
    /// Generated encouragement summary; absent when generation failed
    pub summary: Option<String>,
}

/// Handle `POST /v1/daily-verse`
///
/// Picks a random curated reference, fetches it in the requested (or
/// default) translation, and asks the completion API for a short
/// encouragement summary. Fetch failures surface as error responses;
/// summary failures degrade to `summary: null`.
pub async fn daily_verse_handler(State(state): State<AppState>, Json(request): Json<DailyVerseRequest>) -> Response {
    let translations = state.translations();
    let requested = request
        .translation
        .as_deref()
        .unwrap_or_else(|| translations.default_translation());

    let Some(abbreviation) = translations.canonical(requested).map(str::to_owned) else {
        return error_response(&ScriptureError::UnknownTranslation {
            translation: requested.to_owned(),
        });
    };

    let index = rand::rng().random_range(0..DAILY_REFERENCES.len());
    let (book_name, chapter, verse_number) = DAILY_REFERENCES[index];

    let Some(book) = books::resolve(book_name) else {
        return error_response(&ScriptureError::UnknownBook {
            book: book_name.to_owned(),
        });
    };

    let reference = VerseReference {
        book,
        chapter,
        verses: VerseSpan::Single(verse_number),
        translation: Some(abbreviation.clone()),
    };

    let (_, verse) = match state.lookup(&reference).await {
        Ok(lookup) => lookup,
        Err(e) => return error_response(&e),
    };

    let summary = match state.chat().complete(prompt::summary_request(&verse.content)).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!(reference = %reference, error = %e, "summary generation failed");
            None
        }
    };

    Json(DailyVerseResponse {
        reference: verse.reference,
        translation: abbreviation,
        verse: verse.content,
        summary,
    })
    .into_response()
}
