//! Configuration for the Tracker Relay service

use relay_core::{RelayError, ServiceConfig};

/// Latitude of the demo device seeded at startup.
pub const DEMO_LATITUDE: f64 = 14.5995;
/// Longitude of the demo device seeded at startup.
pub const DEMO_LONGITUDE: f64 = 120.9842;
/// Signal strength reported for the demo device.
pub const DEMO_RSSI: i64 = -70;

/// Tracker Relay configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name, host and HTTP port
    pub service: ServiceConfig,
    /// Allowed CORS origin; `*` allows any origin
    pub cors_origin: String,
    /// Seed a placeholder device at startup for manual testing
    pub seed_demo_device: bool,
    /// Identifier of the placeholder device
    pub demo_device_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> relay_core::Result<Self> {
        Ok(Self {
            service: ServiceConfig::from_env()?,
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            seed_demo_device: parse_flag(
                "SEED_DEMO_DEVICE",
                std::env::var("SEED_DEMO_DEVICE").ok().as_deref(),
                true,
            )?,
            demo_device_id: std::env::var("DEMO_DEVICE_ID")
                .unwrap_or_else(|_| "tracker-001".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        self.service.bind_address()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            cors_origin: "*".to_string(),
            seed_demo_device: true,
            demo_device_id: "tracker-001".to_string(),
        }
    }
}

fn parse_flag(name: &str, raw: Option<&str>, default: bool) -> relay_core::Result<bool> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(other) => Err(RelayError::Config(format!(
            "Invalid {}: expected true/false, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("X", None, true).unwrap());
        assert!(!parse_flag("X", Some("false"), true).unwrap());
        assert!(parse_flag("X", Some(" 1 "), false).unwrap());
        assert!(parse_flag("X", Some("maybe"), true).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.seed_demo_device);
    }
}
