//! The main request/response endpoint

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use berea_chat::{ChatError, Message, prompt};
use berea_scripture::parse_reference;
use serde::{Deserialize, Serialize};

use crate::error::error_response;
use crate::state::AppState;

/// Body of `POST /v1/respond`
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    /// Free-form user text
    pub user_input: String,
    /// Prior turns, passed through to the completion request unmodified
    #[serde(default)]
    pub conversation: Option<Vec<Message>>,
    /// Whether the input came from audio transcription
    #[serde(default)]
    pub is_audio: bool,
}

/// Reply for `POST /v1/respond`
#[derive(Debug, Serialize)]
pub struct RespondResponse {
    /// Composed reply text
    pub reply: String,
    /// Parsed scripture reference, when one was found
    pub reference: Option<String>,
    /// Fetched verse text, when the lookup succeeded
    pub verse: Option<String>,
    /// Conversation with the new user and assistant turns appended
    pub conversation: Vec<Message>,
}

/// Handle `POST /v1/respond`
///
/// Parses a scripture reference out of the user text, fetches the verse
/// when one is found, and composes the reply through the completion API.
/// Lookup failures degrade to a verse-less reply; completion failures
/// surface as error responses.
pub async fn respond_handler(State(state): State<AppState>, Json(request): Json<RespondRequest>) -> Response {
    if request.user_input.trim().is_empty() {
        return error_response(&ChatError::InvalidRequest("user_input must not be empty".to_owned()));
    }

    let mut conversation = request.conversation.unwrap_or_default();

    let mut reference_display = None;
    let mut fetched = None;
    if let Some(reference) = parse_reference(&request.user_input, state.translations()) {
        reference_display = Some(reference.to_string());
        match state.lookup(&reference).await {
            Ok(lookup) => fetched = Some(lookup),
            Err(e) => {
                tracing::warn!(
                    reference = %reference,
                    error = %e,
                    "verse lookup failed, answering without scripture context"
                );
            }
        }
    }

    let context = fetched
        .as_ref()
        .map(|(translation, verse)| prompt::verse_context(&verse.reference, translation, &verse.content));
    let messages = prompt::compose(&request.user_input, context.as_deref(), &conversation);

    let reply = match state.chat().complete(messages).await {
        Ok(reply) => reply,
        Err(e) => return error_response(&e),
    };

    let reply = if request.is_audio {
        format!("{}{reply}", prompt::AUDIO_ACK)
    } else {
        reply
    };

    conversation.push(Message::user(request.user_input));
    conversation.push(Message::assistant(reply.clone()));

    Json(RespondResponse {
        reply,
        reference: reference_display,
        verse: fetched.map(|(_, verse)| verse.content),
        conversation,
    })
    .into_response()
}
