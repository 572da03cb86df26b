//! biogate: biometric capability probe and authentication gate
//!
//! Queries the host platform for biometric hardware support, enrollment,
//! security level and supported modalities, publishes the answers as an
//! atomic capability snapshot, and runs interactive authentication
//! challenges against a pluggable platform backend.

pub mod core;
pub mod types;

/// Capacity of the probe update broadcast channel
pub const UPDATE_CHANNEL_CAPACITY: usize = 100;

pub const VERSION: &str = "1.0.0";
