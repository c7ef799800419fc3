mod daily;
mod error;
mod health;
mod respond;
mod state;

use std::net::SocketAddr;

use axum::{Router, routing};
use berea_config::Config;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if client construction or translation registry
    /// building fails
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let state = AppState::from_config(config)?;

        let mut app = Router::new()
            .route("/v1/respond", routing::post(respond::respond_handler))
            .route("/v1/daily-verse", routing::post(daily::daily_verse_handler));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, routing::get(health::health_handler));
        }

        let router = app.with_state(state).layer(TraceLayer::new_for_http());

        Ok(Self { router, listen_address })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
