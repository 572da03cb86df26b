//! Error taxonomy
//!
//! `ProbeError` covers capability-probe failures and misuse of the probe
//! lifecycle. A failed challenge is NOT an error: the platform reports it as
//! `AuthResult { success: false }` and the probe surfaces an `AuthOutcome`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cause reported by the platform biometrics layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("biometric hardware unavailable: {0}")]
    HardwareUnavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("platform error: {0}")]
    Internal(String),
}

/// Which of the four capability queries failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityQuery {
    HardwareSupport,
    Enrollment,
    SecurityLevel,
    SupportedTypes,
}

impl std::fmt::Display for CapabilityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CapabilityQuery::HardwareSupport => "hardware-support",
            CapabilityQuery::Enrollment => "enrollment",
            CapabilityQuery::SecurityLevel => "security-level",
            CapabilityQuery::SupportedTypes => "supported-types",
        };
        write!(f, "{}", name)
    }
}

/// Errors surfaced by BiometricProbe operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// One of the four capability queries failed. No partial snapshot is
    /// published; the caller decides retry policy.
    #[error("capability query '{which}' failed: {source}")]
    Query {
        which: CapabilityQuery,
        source: PlatformError,
    },

    /// authenticate() called before a snapshot was published
    #[error("probe not initialized: call initialize() before authenticate()")]
    NotInitialized,

    /// Platform-level failure of the challenge itself, distinct from a clean
    /// `success = false` result
    #[error("authentication challenge error: {0}")]
    Challenge(PlatformError),
}

pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_names_the_query() {
        let err = ProbeError::Query {
            which: CapabilityQuery::Enrollment,
            source: PlatformError::PermissionDenied("biometry usage not granted".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("enrollment"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_not_initialized_message() {
        assert!(ProbeError::NotInitialized.to_string().contains("initialize()"));
    }
}
