//! Records held by the device store and the JSON shapes exchanged with
//! trackers and the dashboard

use chrono::{DateTime, Utc};
use relay_core::DeviceId;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Latest position and signal snapshot for one device
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Stored as reported; only its presence is checked.
    pub rssi: Value,
    pub received_at: DateTime<Utc>,
}

/// Buzzer command state for one device.
///
/// The default is the state reported for a device that never received a
/// command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRecord {
    pub buzzer_active: bool,
    pub issued_at: Option<DateTime<Utc>>,
}

/// Validated body of `POST /api/data/{deviceId}`
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryReport {
    pub latitude: f64,
    pub longitude: f64,
    pub rssi: Value,
}

impl TelemetryReport {
    /// Parse a raw request body.
    ///
    /// `latitude` and `longitude` must be JSON numbers. `rssi` must be present
    /// but may hold any value, `null` included. No range checks are applied.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidTelemetry(format!("body is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(Error::InvalidTelemetry(
                "body must be a JSON object".to_string(),
            ));
        };

        let latitude = number_field(&fields, "latitude")?;
        let longitude = number_field(&fields, "longitude")?;
        let rssi = fields
            .remove("rssi")
            .ok_or_else(|| Error::InvalidTelemetry("rssi is required".to_string()))?;

        Ok(Self {
            latitude,
            longitude,
            rssi,
        })
    }
}

fn number_field(fields: &serde_json::Map<String, Value>, name: &str) -> Result<f64> {
    fields
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::InvalidTelemetry(format!("{} must be a number", name)))
}

/// `{message}` body used for acknowledgements and errors
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /api/data/{deviceId}`
///
/// Absence is reported with status 200 and null coordinates, never 404.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TelemetryView {
    #[serde(rename_all = "camelCase")]
    Found {
        latitude: f64,
        longitude: f64,
        rssi: Value,
        received_at: DateTime<Utc>,
    },
    Missing {
        message: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
    },
}

impl TelemetryView {
    pub fn from_record(device_id: &DeviceId, record: Option<TelemetryRecord>) -> Self {
        match record {
            Some(record) => Self::Found {
                latitude: record.latitude,
                longitude: record.longitude,
                rssi: record.rssi,
                received_at: record.received_at,
            },
            None => Self::Missing {
                message: format!("No data available for device {}", device_id),
                latitude: None,
                longitude: None,
            },
        }
    }
}

/// Body of `GET /api/command/{deviceId}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandView {
    pub buzzer_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl From<CommandRecord> for CommandView {
    fn from(record: CommandRecord) -> Self {
        Self {
            buzzer_active: record.buzzer_active,
            issued_at: record.issued_at,
        }
    }
}
