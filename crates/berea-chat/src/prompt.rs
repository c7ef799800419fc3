//! Persona prompt and message composition

use indoc::indoc;

use crate::message::{Message, Role};

/// Fixed persona instruction framing every reply
pub const PERSONA: &str = indoc! {"
    You are a compassionate and knowledgeable assistant helping people
    understand the Bible and Christian teachings. Your audience may include
    people who do not believe in God, are new to Christianity, or come from
    different cultural and religious backgrounds. Always communicate with
    kindness, patience, and respect, avoiding judgment or assumptions about
    the user's beliefs.

    When answering questions, provide clear and simple explanations, and
    support them with relevant Bible verses, quoting the exact text together
    with the book, chapter, and verse reference whenever you can. If the
    user does not specify a Bible version, gently invite them to name one
    (for example NIV, RSVCE, or CSB). If a reference is unclear or
    incomplete, kindly ask the user to clarify the full book, chapter,
    verse, and version. When discussing differences between Christian
    traditions, explain them factually and without favoritism, and help
    users connect Biblical teachings to everyday life.

    If a question is about complex doctrine or beyond your scope, say so
    politely and offer to find relevant passages instead. Keep your
    responses concise and under 100 words unless the user requests more
    detail.
"};

/// System persona for daily verse summaries
pub const SUMMARY_PERSONA: &str =
    "You summarize Bible verses for daily encouragement, focusing on spiritual insight and practical application.";

/// Prefix acknowledging audio-transcribed input
pub const AUDIO_ACK: &str = "(Received as a transcribed voice message.)\n\n";

/// Number of prior conversation turns carried into each completion request
pub const HISTORY_WINDOW: usize = 3;

/// Build the message list for a completion request
///
/// Persona first, then the optional scripture context, then the most
/// recent conversation turns, then the user message. Caller-supplied
/// system turns are dropped so the persona cannot be overridden.
pub fn compose(user_input: &str, verse_context: Option<&str>, history: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(HISTORY_WINDOW + 3);
    messages.push(Message::system(PERSONA));

    if let Some(context) = verse_context {
        messages.push(Message::system(context));
    }

    let tail = history.len().saturating_sub(HISTORY_WINDOW);
    messages.extend(history[tail..].iter().filter(|m| m.role != Role::System).cloned());

    messages.push(Message::user(user_input));
    messages
}

/// Format fetched verse text as a scripture-context system message
pub fn verse_context(reference: &str, translation: &str, text: &str) -> String {
    format!("Scripture context for this reply: {reference} ({translation}): \"{text}\"")
}

/// Build the message list for a daily verse summary request
pub fn summary_request(verse_text: &str) -> Vec<Message> {
    vec![
        Message::system(SUMMARY_PERSONA),
        Message::user(format!(
            "Summarize this Bible verse in 100 words or less for encouragement and clarity.\n\nVerse: {verse_text}"
        )),
    ]
}
