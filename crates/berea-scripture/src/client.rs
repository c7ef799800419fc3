use std::sync::OnceLock;

use berea_config::ScriptureConfig;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::ScriptureError;
use crate::reference::VerseReference;

/// Default scripture API base URL
const DEFAULT_BASE_URL: &str = "https://api.scripture.api.bible/v1";

/// Async HTTP client for the scripture lookup API
#[derive(Clone)]
pub struct ScriptureClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

/// Verse text retrieved from the scripture API
#[derive(Debug, Clone)]
pub struct FetchedVerse {
    /// Canonical display reference (e.g. `John 3:16`)
    pub reference: String,
    /// Plain verse text, HTML markup stripped
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct VerseEnvelope {
    data: VerseData,
}

#[derive(Debug, Deserialize)]
struct VerseData {
    content: String,
    #[serde(default)]
    reference: Option<String>,
}

impl ScriptureClient {
    /// Create from scripture configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &ScriptureConfig) -> Result<Self, ScriptureError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        let http = reqwest::Client::builder().build().map_err(ScriptureError::Request)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch verse text for a parsed reference
    ///
    /// Issues one GET against the verses (or passages, for ranges)
    /// endpoint. No retry, no caching.
    ///
    /// # Errors
    ///
    /// Returns `VerseNotFound` on upstream 404, `Upstream` on any other
    /// non-success status, `Request` on connection failure, and
    /// `MalformedResponse` when the body does not decode
    pub async fn fetch(&self, reference: &VerseReference, bible_id: &str) -> Result<FetchedVerse, ScriptureError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = format!("{base}/bibles/{bible_id}/{}", reference.api_path());

        tracing::debug!(%url, "fetching scripture");

        let response = self
            .http
            .get(&url)
            .header("api-key", self.api_key.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScriptureError::VerseNotFound {
                reference: reference.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "scripture API returned error");
            return Err(ScriptureError::Upstream(format!("scripture API returned {status}: {body}")));
        }

        let envelope: VerseEnvelope = response
            .json()
            .await
            .map_err(|e| ScriptureError::MalformedResponse(e.to_string()))?;

        Ok(FetchedVerse {
            reference: envelope.data.reference.unwrap_or_else(|| reference.to_string()),
            content: strip_html(&envelope.data.content),
        })
    }
}

impl std::fmt::Debug for ScriptureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptureClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Remove HTML markup and collapse whitespace
///
/// The upstream API returns verse content as an HTML fragment.
fn strip_html(content: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("must be valid regex"));

    re.replace_all(content, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
