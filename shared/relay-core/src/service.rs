//! Service infrastructure for relay processes

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use crate::error::{RelayError, Result};

/// Body of the liveness check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub healthy: bool,
    pub service_id: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Body of the readiness check
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessStatus {
    pub ready: bool,
}

/// Standard trait every relay process implements
#[async_trait]
pub trait RelayService: Send + Sync + 'static {
    /// Service identifier (e.g., "tracker-relay")
    fn service_id(&self) -> &'static str;

    /// Service version
    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Graceful shutdown
    async fn shutdown(&self) -> Result<()>;

    /// Start serving. Returns only when the server stops or fails.
    async fn start(&self) -> Result<()>;
}

/// Standard runtime bootstrap
pub struct MicroserviceRuntime {
    start_time: std::time::Instant,
}

impl MicroserviceRuntime {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }

    /// Run a service until it exits on its own or a shutdown signal arrives.
    ///
    /// A start failure (for example a port already in use) is returned to the
    /// caller instead of leaving the process idling until a signal.
    pub async fn run<S: RelayService>(service: Arc<S>) -> Result<()> {
        let runtime = Self::new();

        info!(
            service_id = service.service_id(),
            version = service.version(),
            "Starting microservice"
        );

        let service_clone = service.clone();
        let mut service_handle = tokio::spawn(async move { service_clone.start().await });

        let outcome = tokio::select! {
            joined = &mut service_handle => match joined {
                Ok(Ok(())) => {
                    warn!("Service exited without a shutdown signal");
                    Ok(())
                }
                Ok(Err(e)) => {
                    error!(code = e.error_code(), "Service error: {}", e);
                    Err(e)
                }
                Err(e) => Err(RelayError::Internal(format!("Service task failed: {}", e))),
            },
            _ = Self::wait_for_shutdown() => {
                info!("Shutdown signal received, gracefully stopping...");
                Ok(())
            }
        };

        if let Err(e) = service.shutdown().await {
            warn!("Error during shutdown: {}", e);
        }

        service_handle.abort();

        info!(
            uptime_seconds = runtime.start_time.elapsed().as_secs(),
            "Microservice stopped"
        );

        outcome
    }

    async fn wait_for_shutdown() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    error!("Failed to listen for SIGTERM: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }
}

impl Default for MicroserviceRuntime {
    fn default() -> Self {
        Self::new()
    }
}
