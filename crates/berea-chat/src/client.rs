use berea_config::ChatConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::ChatError;
use crate::message::Message;
use crate::protocol::{CompletionRequest, CompletionResponse};

/// Default completion API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Async HTTP client for the chat completion API
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl ChatClient {
    /// Create from chat configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        let http = reqwest::Client::builder().build().map_err(ChatError::Request)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Issue one synchronous (non-streaming) completion request
    ///
    /// Returns the text of the first choice.
    ///
    /// # Errors
    ///
    /// Returns `Upstream` on a non-success status or undecodable body,
    /// `Request` on connection failure, and `EmptyCompletion` when the
    /// response carries no content
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        let base = self.base_url.as_str().trim_end_matches('/');
        let response = self
            .http
            .post(format!("{base}/chat/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %self.model, error = %e, "completion request failed");
                ChatError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(model = %self.model, %status, "completion API returned error");
            return Err(ChatError::Upstream(format!("completion API returned {status}: {body}")));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Upstream(format!("failed to parse response: {e}")))?;

        if let Some(usage) = completion.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyCompletion)
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
