//! Chat completion support for Berea
//!
//! Wraps the OpenAI-compatible chat completions API and composes the
//! persona prompt that frames every reply.

mod client;
mod error;
mod message;
pub mod prompt;
mod protocol;

pub use client::ChatClient;
pub use error::ChatError;
pub use message::{Message, Role};
pub use protocol::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Usage};
