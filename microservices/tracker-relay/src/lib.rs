//! Tracker Relay
//!
//! Relay between field-deployed location trackers and a monitoring dashboard:
//! - Trackers push GPS position and signal strength
//! - Operators arm a one-shot buzzer for a device
//! - Trackers poll for the buzzer flag, which clears once delivered
//!
//! All state is in memory and lost on restart.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;


use relay_telemetry::{Counter, Gauge};
use std::sync::Arc;
use std::time::Instant;

pub use config::Config;
pub use error::{Error, Result};
pub use service::TrackerRelayService;
pub use store::DeviceStore;

/// Request counters and store levels exposed on `/stats`
#[derive(Clone)]
pub struct RelayMetrics {
    pub telemetry_accepted: Counter,
    pub telemetry_rejected: Counter,
    pub commands_issued: Counter,
    pub commands_delivered: Counter,
    pub known_devices: Gauge,
    pub pending_commands: Gauge,
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self {
            telemetry_accepted: Counter::new("telemetry_accepted"),
            telemetry_rejected: Counter::new("telemetry_rejected"),
            commands_issued: Counter::new("commands_issued"),
            commands_delivered: Counter::new("commands_delivered"),
            known_devices: Gauge::new("known_devices"),
            pending_commands: Gauge::new("pending_commands"),
        }
    }

    /// Re-read the gauge levels after a write to the store.
    pub fn refresh_levels(&self, store: &DeviceStore) {
        self.known_devices.set(store.device_count() as u64);
        self.pending_commands.set(store.pending_commands() as u64);
    }
}

impl Default for RelayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DeviceStore>,
    pub metrics: RelayMetrics,
    pub config: Arc<Config>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<DeviceStore>, config: Config) -> Self {
        let metrics = RelayMetrics::new();
        metrics.refresh_levels(&store);
        Self {
            store,
            metrics,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
