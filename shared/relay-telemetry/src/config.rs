//! Telemetry Configuration

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: parse_json_flag(std::env::var("JSON_LOGS").ok().as_deref()),
        }
    }
}

fn parse_json_flag(raw: Option<&str>) -> bool {
    raw.map(|v| v == "true" || v == "1").unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_logs_default_on() {
        assert!(parse_json_flag(None));
        assert!(parse_json_flag(Some("1")));
        assert!(!parse_json_flag(Some("false")));
    }
}
