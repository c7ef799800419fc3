//! Bible reference handling for Berea
//!
//! Parses book/chapter/verse references out of free-form text, resolves
//! translation abbreviations to upstream bible identifiers, and fetches
//! verse text from the scripture lookup API.

pub mod books;
mod client;
mod error;
mod reference;
mod registry;

pub use client::{FetchedVerse, ScriptureClient};
pub use error::ScriptureError;
pub use reference::{VerseReference, VerseSpan, parse_reference};
pub use registry::TranslationRegistry;
