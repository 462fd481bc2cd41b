//! HTTP handlers for the Tracker Relay API

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use relay_core::{DeviceId, HealthStatus, ReadinessStatus};
use relay_telemetry::MetricSnapshot;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{CommandView, MessageResponse, TelemetryReport, TelemetryView};
use crate::{AppState, Result};

/// Stats response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub uptime_seconds: u64,
    pub counters: Vec<MetricSnapshot>,
    pub gauges: Vec<MetricSnapshot>,
}

// ============================================
// Health & Metrics Handlers
// ============================================

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        healthy: true,
        service_id: state.config.service.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

pub async fn ready() -> Json<ReadinessStatus> {
    // No external dependencies; serving requests means ready.
    Json(ReadinessStatus { ready: true })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let metrics = &state.metrics;
    Json(StatsResponse {
        uptime_seconds: state.start_time.elapsed().as_secs(),
        counters: vec![
            metrics.telemetry_accepted.snapshot(),
            metrics.telemetry_rejected.snapshot(),
            metrics.commands_issued.snapshot(),
            metrics.commands_delivered.snapshot(),
        ],
        gauges: vec![
            metrics.known_devices.snapshot(),
            metrics.pending_commands.snapshot(),
        ],
    })
}

// ============================================
// Telemetry Handlers
// ============================================

/// `POST /api/data/{deviceId}`
///
/// The body is read raw: a missing content type is accepted, and unparseable
/// JSON gets the same 400 `{message}` response as a wrong-shaped object.
pub async fn report_telemetry(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>> {
    let device_id = DeviceId::from(device_id);

    let report = match TelemetryReport::from_slice(&body) {
        Ok(report) => report,
        Err(e) => {
            state.metrics.telemetry_rejected.inc();
            warn!(device_id = %device_id, error = %e, "Rejected telemetry report");
            return Err(e);
        }
    };

    let record = state.store.record_report(device_id.clone(), report);
    state.metrics.telemetry_accepted.inc();
    state.metrics.refresh_levels(&state.store);
    info!(
        device_id = %device_id,
        latitude = record.latitude,
        longitude = record.longitude,
        rssi = %record.rssi,
        "Telemetry received"
    );

    Ok(Json(MessageResponse::new(format!(
        "Data received for device {}",
        device_id
    ))))
}

/// `GET /api/data/{deviceId}`
pub async fn get_telemetry(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<TelemetryView> {
    let device_id = DeviceId::from(device_id);
    let record = state.store.get_telemetry(&device_id);
    if record.is_none() {
        debug!(device_id = %device_id, "No telemetry for device");
    }
    Json(TelemetryView::from_record(&device_id, record))
}

// ============================================
// Command Handlers
// ============================================

/// `POST /api/command/{deviceId}`. Any request body is ignored.
pub async fn issue_command(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<MessageResponse> {
    let device_id = DeviceId::from(device_id);
    state.store.issue_command(device_id.clone());
    state.metrics.commands_issued.inc();
    state.metrics.refresh_levels(&state.store);
    info!(device_id = %device_id, "Buzzer command issued");

    Json(MessageResponse::new(format!(
        "Buzzer command sent to device {}",
        device_id
    )))
}

/// `GET /api/command/{deviceId}`
///
/// Returns the state observed before clearing; an armed buzzer is reported
/// to exactly one poll.
pub async fn poll_command(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<CommandView> {
    let device_id = DeviceId::from(device_id);
    let record = state.store.read_and_clear_command(&device_id);
    if record.buzzer_active {
        state.metrics.commands_delivered.inc();
        state.metrics.refresh_levels(&state.store);
        info!(device_id = %device_id, "Buzzer command delivered");
    }
    Json(CommandView::from(record))
}
