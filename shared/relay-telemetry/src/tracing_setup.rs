//! Tracing Setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Install the global subscriber. Fails if one is already installed.
///
/// Exactly one of the two output layers is active: one JSON object per line
/// for log shippers, or compact text when `JSON_LOGS` is off.
pub fn init_tracing(service_name: &str, config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let json_output = config.json_logs.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_target(true)
    });
    let text_output = (!config.json_logs).then(|| fmt::layer().compact().with_target(true));

    tracing_subscriber::registry()
        .with(level_filter(&config.log_level))
        .with(json_output)
        .with(text_output)
        .try_init()
        .map_err(|e| TelemetryError::TracingInit(e.to_string()))?;

    tracing::info!(
        service = service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Logging ready"
    );

    Ok(())
}

/// Directives from `log_level`, falling back to `info` when they do not parse.
fn level_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}
