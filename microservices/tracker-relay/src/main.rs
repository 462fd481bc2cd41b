//! Tracker Relay binary

use relay_core::MicroserviceRuntime;
use std::sync::Arc;
use tracing::info;
use tracker_relay::{Config, TrackerRelayService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    relay_telemetry::init("tracker-relay")?;

    info!("Starting Tracker Relay");

    let config = Config::from_env()?;
    let service = Arc::new(TrackerRelayService::new(config));
    MicroserviceRuntime::run(service).await?;

    Ok(())
}
