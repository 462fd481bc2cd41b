//! Service lifecycle for the Tracker Relay

use async_trait::async_trait;
use relay_core::{DeviceId, RelayService, Result};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, DEMO_LATITUDE, DEMO_LONGITUDE, DEMO_RSSI};
use crate::routes;
use crate::{AppState, DeviceStore};

pub struct TrackerRelayService {
    state: AppState,
}

impl TrackerRelayService {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(DeviceStore::new());
        if config.seed_demo_device {
            seed_demo_device(&store, &config.demo_device_id);
        }

        Self {
            state: AppState::new(store, config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Placeholder device for manual testing against a fresh process
fn seed_demo_device(store: &DeviceStore, device_id: &str) {
    store.set_telemetry(
        DeviceId::from(device_id),
        DEMO_LATITUDE,
        DEMO_LONGITUDE,
        json!(DEMO_RSSI),
    );
    info!(device_id = %device_id, "Seeded demo device");
}

#[async_trait]
impl RelayService for TrackerRelayService {
    fn service_id(&self) -> &'static str {
        "tracker-relay"
    }

    async fn shutdown(&self) -> Result<()> {
        info!(
            devices = self.state.store.device_count(),
            pending_commands = self.state.store.pending_commands(),
            "Shutting down Tracker Relay; in-memory state is discarded"
        );
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        let bind_addr = self.state.config.bind_address();
        let app = routes::create_router(self.state.clone())?;

        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            bind = %bind_addr,
            cors_origin = %self.state.config.cors_origin,
            "Tracker Relay listening"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_demo_device_when_enabled() {
        let service = TrackerRelayService::new(Config::default());
        let record = service
            .state()
            .store
            .get_telemetry(&DeviceId::new("tracker-001"))
            .unwrap();
        assert_eq!(record.latitude, DEMO_LATITUDE);
        assert_eq!(record.rssi, json!(-70));
        assert_eq!(service.state().metrics.known_devices.get(), 1);
    }

    #[test]
    fn test_no_seed_when_disabled() {
        let config = Config {
            seed_demo_device: false,
            ..Config::default()
        };
        let service = TrackerRelayService::new(config);
        assert_eq!(service.state().store.device_count(), 0);
        assert_eq!(service.state().metrics.known_devices.get(), 0);
    }
}
