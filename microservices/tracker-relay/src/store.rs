//! In-memory device state
//!
//! Two independent tables keyed by device id: the latest telemetry snapshot
//! and the buzzer command flag. Nothing is persisted or evicted; the store
//! lives as long as the process.

use chrono::Utc;
use dashmap::DashMap;
use relay_core::DeviceId;
use serde_json::Value;

use crate::models::{CommandRecord, TelemetryRecord, TelemetryReport};

/// Per-device telemetry and command tables
#[derive(Debug, Default)]
pub struct DeviceStore {
    telemetry: DashMap<DeviceId, TelemetryRecord>,
    commands: DashMap<DeviceId, CommandRecord>,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the device's telemetry snapshot, stamping the current time.
    pub fn set_telemetry(
        &self,
        device_id: DeviceId,
        latitude: f64,
        longitude: f64,
        rssi: Value,
    ) -> TelemetryRecord {
        let record = TelemetryRecord {
            latitude,
            longitude,
            rssi,
            received_at: Utc::now(),
        };
        self.telemetry.insert(device_id, record.clone());
        record
    }

    pub fn record_report(&self, device_id: DeviceId, report: TelemetryReport) -> TelemetryRecord {
        self.set_telemetry(device_id, report.latitude, report.longitude, report.rssi)
    }

    /// Latest snapshot, or `None` if the device never reported.
    pub fn get_telemetry(&self, device_id: &DeviceId) -> Option<TelemetryRecord> {
        self.telemetry.get(device_id).map(|entry| entry.value().clone())
    }

    /// Arm the buzzer. Issuing again before the next poll changes only the
    /// timestamp; commands are not queued.
    pub fn issue_command(&self, device_id: DeviceId) -> CommandRecord {
        let record = CommandRecord {
            buzzer_active: true,
            issued_at: Some(Utc::now()),
        };
        self.commands.insert(device_id, record.clone());
        record
    }

    /// Return the command state as it was before this call and disarm it.
    ///
    /// The read and the reset happen under the entry's write guard, so for a
    /// single issuance exactly one caller observes `buzzer_active == true`.
    pub fn read_and_clear_command(&self, device_id: &DeviceId) -> CommandRecord {
        match self.commands.get_mut(device_id) {
            Some(mut entry) => {
                let observed = entry.value().clone();
                if observed.buzzer_active {
                    let cleared = entry.value_mut();
                    cleared.buzzer_active = false;
                    cleared.issued_at = Some(Utc::now());
                }
                observed
            }
            None => CommandRecord::default(),
        }
    }

    /// Number of devices that have reported telemetry at least once
    pub fn device_count(&self) -> usize {
        self.telemetry.len()
    }

    /// Number of devices with an armed, not yet delivered buzzer
    pub fn pending_commands(&self) -> usize {
        self.commands.iter().filter(|entry| entry.buzzer_active).count()
    }
}
