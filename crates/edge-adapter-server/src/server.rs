//! HTTP server implementation.
//!
//! This module provides the main [`PreviewServer`] struct for running
//! the local preview HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use edge_adapter_common::AdapterError;
use edge_adapter_core::SsrApp;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server.
    pub bind_addr: SocketAddr,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Enable graceful shutdown on SIGTERM/SIGINT.
    pub graceful_shutdown: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8788)),
            request_timeout_secs: 30,
            graceful_shutdown: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server config with custom bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Create a new server config with custom timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Get the request timeout as Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Local preview HTTP server.
///
/// Serves one deployment through its adapter until shutdown.
pub struct PreviewServer<A> {
    /// Application state.
    state: AppState<A>,
    /// Server configuration.
    config: ServerConfig,
}

impl<A: SsrApp + 'static> PreviewServer<A> {
    /// Create a new server instance.
    pub fn new(state: AppState<A>, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// Get a reference to the application state.
    pub fn state(&self) -> &AppState<A> {
        &self.state
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until shutdown.
    ///
    /// This will block until the server is shut down via signal
    /// (SIGTERM/SIGINT) if graceful shutdown is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind to the address.
    pub async fn run(self) -> Result<(), AdapterError> {
        let app = build_router(self.state, self.config.request_timeout());

        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .map_err(|e| AdapterError::invalid_config(format!("Failed to bind: {e}")))?;

        info!(addr = %self.config.bind_addr, "Starting preview server");

        if self.config.graceful_shutdown {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(|e| AdapterError::invalid_config(format!("Server error: {e}")))?;
        } else {
            axum::serve(listener, app)
                .await
                .map_err(|e| AdapterError::invalid_config(format!("Server error: {e}")))?;
        }

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8788);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.graceful_shutdown);
    }

    #[test]
    fn test_server_config_builder() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let config = ServerConfig::default()
            .with_bind_addr(addr)
            .with_timeout(60);

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
    }
}
