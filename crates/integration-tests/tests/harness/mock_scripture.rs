//! Mock scripture lookup backend for integration tests
//!
//! Serves canned verse content for any reference, wrapped in the HTML
//! markup the real API produces

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Canned verse body served for every reference
pub const VERSE_HTML: &str = "<p><span data-number=\"16\">16</span>For God so loved the world</p>";

/// Plain form of [`VERSE_HTML`] after markup stripping
pub const VERSE_TEXT: &str = "16 For God so loved the world";

/// Mock scripture backend
pub struct MockScripture {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockScriptureState>,
}

struct MockScriptureState {
    lookup_count: AtomicU32,
    /// When true, every lookup returns 500
    failing: bool,
    /// `{bible_id}/{reference}` of the most recent lookup
    last_lookup: Mutex<Option<String>>,
}

impl MockScripture {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    /// Start a mock server where every lookup fails with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    async fn start_inner(failing: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockScriptureState {
            lookup_count: AtomicU32::new(0),
            failing,
            last_lookup: Mutex::new(None),
        });

        let app = Router::new()
            .route("/bibles/{bible_id}/verses/{reference}", routing::get(handle_lookup))
            .route("/bibles/{bible_id}/passages/{reference}", routing::get(handle_lookup))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the scripture backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of lookup requests received
    pub fn lookup_count(&self) -> u32 {
        self.state.lookup_count.load(Ordering::Relaxed)
    }

    /// `{bible_id}/{reference}` of the most recent lookup
    pub fn last_lookup(&self) -> Option<String> {
        self.state.last_lookup.lock().expect("mock lock poisoned").clone()
    }
}

impl Drop for MockScripture {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_lookup(
    State(state): State<Arc<MockScriptureState>>,
    Path((bible_id, reference)): Path<(String, String)>,
) -> impl IntoResponse {
    state.lookup_count.fetch_add(1, Ordering::Relaxed);
    *state.last_lookup.lock().expect("mock lock poisoned") = Some(format!("{bible_id}/{reference}"));

    if state.failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock scripture failure").into_response();
    }

    Json(serde_json::json!({
        "data": {
            "id": reference,
            "content": VERSE_HTML,
            "reference": "John 3:16"
        }
    }))
    .into_response()
}
