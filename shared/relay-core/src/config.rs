//! Configuration management for relay services

use crate::error::{RelayError, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_HTTP_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub host: String,
    pub http_port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "tracker-relay".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: parse_port(env::var("PORT").ok().as_deref())?,
        })
    }

    /// Address handed to the TCP listener, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "tracker-relay".to_string(),
            host: "0.0.0.0".to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_HTTP_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| RelayError::Config(format!("Invalid PORT '{}': {}", value, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn test_port_parses_override() {
        assert_eq!(parse_port(Some("8081")).unwrap(), 8081);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = parse_port(Some("eighty")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_bind_address() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            http_port: 4000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:4000");
    }
}
