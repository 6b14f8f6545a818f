use axum::Router;
use axum::routing::{get, post};
use lecbot_config::Config;
use lecbot_core::{FileStore, Resolver};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::handler::{handle_file, handle_request};
use crate::{Error, Result};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver<Arc<dyn FileStore>>>,
}

/// HTTP server exposing the resolver and the file download route.
pub struct Server {
    bind: String,
    state: AppState,
}

impl Server {
    #[must_use]
    pub fn new(bind: impl Into<String>, resolver: Resolver<Arc<dyn FileStore>>) -> Self {
        Self {
            bind: bind.into(),
            state: AppState {
                resolver: Arc::new(resolver),
            },
        }
    }

    /// Server on `server.bind` answering from the configured catalog.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = config
            .build_resolver()
            .map_err(|e| Error::Config(format!("{e:#}")))?;
        Ok(Self::new(config.server.bind.clone(), resolver))
    }

    #[must_use]
    pub fn bind(&self) -> &str {
        &self.bind
    }

    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/request", post(handle_request))
            .route("/file/:filename", get(handle_file))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl+C.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.bind).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
