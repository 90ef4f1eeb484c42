//! Relay server listener
//!
//! Binds the HTTP server and drives it until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::Result;
use crate::registry::{ChannelRegistry, RegistryConfig};
use crate::server::config::ServerConfig;
use crate::server::routes::routes;
use crate::server::shutdown::Shutdown;

/// Notification relay server
pub struct RelayServer {
    config: ServerConfig,
    registry: Arc<ChannelRegistry>,
    shutdown: Shutdown,
}

impl RelayServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry_config(config, RegistryConfig::default())
    }

    /// Create a new server with custom registry configuration
    pub fn with_registry_config(config: ServerConfig, registry_config: RegistryConfig) -> Self {
        Self {
            config,
            registry: Arc::new(ChannelRegistry::with_config(registry_config)),
            shutdown: Shutdown::new(),
        }
    }

    /// Get a reference to the channel registry
    pub fn registry(&self) -> &Arc<ChannelRegistry> {
        &self.registry
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }

    /// Run the server until the process exits
    pub async fn run(&self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run the server with graceful shutdown
    ///
    /// When `shutdown` resolves, every open event stream is ended and the
    /// server gets `shutdown_timeout` to finish in-flight requests.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let filter = routes(
            Arc::clone(&self.registry),
            self.shutdown.to_signal(),
            &self.config,
        );

        let signal = self.shutdown.to_signal();
        let (addr, server) = warp::serve(filter)
            .try_bind_with_graceful_shutdown(self.config.bind_addr, async move {
                signal.wait().await
            })?;
        tracing::info!(addr = %addr, "Relay server listening");

        tokio::pin!(server);
        tokio::select! {
            _ = &mut server => {
                tracing::warn!("Server stopped unexpectedly");
                return Ok(());
            }
            _ = shutdown => {
                tracing::info!("Shutdown signal received");
            }
        }

        self.shutdown.trigger();
        let timeout = self.config.shutdown_timeout;
        match tokio::time::timeout(timeout, server).await {
            Ok(()) => tracing::info!("Server stopped"),
            Err(_) => tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "Connections still open after shutdown timeout, exiting"
            ),
        }

        Ok(())
    }
}
