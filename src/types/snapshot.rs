//! Capability snapshot published after a probe cycle
//!
//! A snapshot is immutable once fetched and replaced wholesale on re-probe.
//! It lives in memory only, scoped to the owning probe instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AuthenticationType, SecurityLevel};

/// Result of one complete capability probe cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// Device has biometric hardware
    pub hardware_supported: bool,
    /// User has enrolled at least one biometric credential
    pub enrolled: bool,
    /// Highest enrolled security level
    pub security_level: SecurityLevel,
    /// Modalities the hardware supports, sorted and deduplicated
    pub modalities: Vec<AuthenticationType>,
    /// When this snapshot was taken
    pub probed_at: DateTime<Utc>,
}

impl CapabilitySnapshot {
    /// Assemble a snapshot from the four query results.
    ///
    /// Modalities are sorted and deduplicated so two probes over identical
    /// platform answers compare equal regardless of reporting order.
    pub fn new(
        hardware_supported: bool,
        enrolled: bool,
        security_level: SecurityLevel,
        mut modalities: Vec<AuthenticationType>,
    ) -> Self {
        modalities.sort();
        modalities.dedup();
        Self {
            hardware_supported,
            enrolled,
            security_level,
            modalities,
            probed_at: Utc::now(),
        }
    }

    /// Can an interactive biometric challenge plausibly succeed?
    pub fn is_usable(&self) -> bool {
        self.hardware_supported && self.enrolled && self.security_level.is_biometric()
    }

    /// Same platform answers as another snapshot, ignoring timestamps
    pub fn same_capabilities(&self, other: &CapabilitySnapshot) -> bool {
        self.hardware_supported == other.hardware_supported
            && self.enrolled == other.enrolled
            && self.security_level == other.security_level
            && self.modalities == other.modalities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modalities_sorted_and_deduped() {
        let snap = CapabilitySnapshot::new(
            true,
            true,
            SecurityLevel::BiometricStrong,
            vec![
                AuthenticationType::Iris,
                AuthenticationType::Fingerprint,
                AuthenticationType::Fingerprint,
            ],
        );
        assert_eq!(
            snap.modalities,
            vec![AuthenticationType::Fingerprint, AuthenticationType::Iris]
        );
    }

    #[test]
    fn test_usable_requires_all_three() {
        let strong = CapabilitySnapshot::new(
            true,
            true,
            SecurityLevel::BiometricStrong,
            vec![AuthenticationType::Fingerprint],
        );
        assert!(strong.is_usable());

        let no_hardware = CapabilitySnapshot::new(false, true, SecurityLevel::BiometricStrong, vec![]);
        assert!(!no_hardware.is_usable());

        let secret_only = CapabilitySnapshot::new(
            true,
            true,
            SecurityLevel::Secret,
            vec![AuthenticationType::Fingerprint],
        );
        assert!(!secret_only.is_usable());
    }

    #[test]
    fn test_same_capabilities_ignores_timestamp() {
        let a = CapabilitySnapshot::new(true, false, SecurityLevel::Secret, vec![]);
        let b = CapabilitySnapshot::new(true, false, SecurityLevel::Secret, vec![]);
        assert!(a.same_capabilities(&b));
    }
}
