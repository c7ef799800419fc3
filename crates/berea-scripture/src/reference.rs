//! Free-text Bible reference parsing

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::books::{self, Book};
use crate::registry::TranslationRegistry;

/// Verse selection within a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSpan {
    /// One verse
    Single(u32),
    /// Inclusive verse range
    Range { start: u32, end: u32 },
}

/// A parsed scripture reference, created per request and discarded after use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    /// Resolved book
    pub book: &'static Book,
    /// Chapter number
    pub chapter: u32,
    /// Verse or verse range
    pub verses: VerseSpan,
    /// Canonical translation abbreviation, when the text named one
    pub translation: Option<String>,
}

impl VerseReference {
    /// Upstream API path for this reference, relative to `/bibles/{id}/`
    ///
    /// Single verses use the verses endpoint, ranges the passages endpoint.
    pub fn api_path(&self) -> String {
        let code = self.book.code;
        let chapter = self.chapter;
        match self.verses {
            VerseSpan::Single(verse) => format!("verses/{code}.{chapter}.{verse}"),
            VerseSpan::Range { start, end } => {
                format!("passages/{code}.{chapter}.{start}-{code}.{chapter}.{end}")
            }
        }
    }
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:", self.book.name, self.chapter)?;
        match self.verses {
            VerseSpan::Single(verse) => write!(f, "{verse}"),
            VerseSpan::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `[1-3]? Book[ of Word] chapter:verse[-verse]`
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:\b([1-3])\s*)?\b([A-Za-z]+(?:\s+of\s+[A-Za-z]+)?)\.?\s+(\d{1,3})\s*:\s*(\d{1,3})(?:\s*[-\u{2013}]\s*(\d{1,3}))?")
            .expect("must be valid regex")
    })
}

/// Extract the first scripture reference from free-form text
///
/// Tolerates aliases and arbitrary case in book names, numbered and
/// multi-word books, and verse ranges. A trailing token or edition name
/// selects the translation only if it resolves in the registry; anything
/// else leaves `translation` unset so the caller applies its default.
/// Returns `None` when no candidate resolves, in which case the text is
/// treated as a general question.
pub fn parse_reference(text: &str, registry: &TranslationRegistry) -> Option<VerseReference> {
    for captures in reference_re().captures_iter(text) {
        let words = captures.get(2).expect("book group always present").as_str();
        let candidate = match captures.get(1) {
            Some(prefix) => format!("{} {words}", prefix.as_str()),
            None => words.to_owned(),
        };

        // The `of`-branch of the regex can swallow a preceding word
        // ("me of John 3:16"), so fall back to the word adjacent to the
        // chapter number.
        let book = books::resolve(&candidate)
            .or_else(|| words.rsplit_once(' ').and_then(|(_, last)| books::resolve(last)));
        let Some(book) = book else {
            continue;
        };

        let chapter: u32 = captures[3].parse().ok()?;
        let start: u32 = captures[4].parse().ok()?;
        let verses = match captures.get(5).and_then(|m| m.as_str().parse::<u32>().ok()) {
            Some(end) if end > start => VerseSpan::Range { start, end },
            _ => VerseSpan::Single(start),
        };

        let overall = captures.get(0).expect("capture 0 always present");
        let translation = detect_translation(&text[overall.end()..], registry);

        return Some(VerseReference {
            book,
            chapter,
            verses,
            translation,
        });
    }

    None
}

/// Find a registered translation in the text following a reference
///
/// Tries multi-token phrases first so full edition names win over their
/// component words, then falls back to scanning single tokens.
fn detect_translation(tail: &str, registry: &TranslationRegistry) -> Option<String> {
    let tokens: Vec<&str> = tail
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|token| !token.is_empty())
        .take(6)
        .collect();

    for width in (2..=tokens.len()).rev() {
        for window in tokens.windows(width) {
            let phrase = window.join(" ");
            if let Some(abbreviation) = registry.canonical(&phrase) {
                return Some(abbreviation.to_owned());
            }
        }
    }

    tokens
        .iter()
        .find_map(|token| registry.canonical(token))
        .map(str::to_owned)
}
