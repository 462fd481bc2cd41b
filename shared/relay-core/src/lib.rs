//! Relay Core - Shared service infrastructure for the tracker relay
//!
//! This crate provides:
//! - Standard service trait and lifecycle runtime
//! - Device identifier type shared by every table
//! - Error handling utilities
//! - Configuration management

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use domain::DeviceId;
pub use error::{RelayError, Result};
pub use service::{HealthStatus, MicroserviceRuntime, ReadinessStatus, RelayService};
