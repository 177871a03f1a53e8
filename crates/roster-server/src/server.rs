use std::future::Future;
use std::sync::Arc;

use roster_store::InMemoryRecordStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Roster HTTP server.
///
/// Owns the record store for its whole lifetime; each server instance has
/// its own independent store.
pub struct RosterServer {
    config: ServerConfig,
    store: Arc<InMemoryRecordStore>,
}

impl RosterServer {
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;
        let store = Arc::new(InMemoryRecordStore::with_config(config.store_config()));
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryRecordStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.store.clone())
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Start serving requests until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Roster server listening on {}", local_addr);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("Roster server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
