//! Human-readable labels for capability enums
//!
//! This table belongs to the presentation layer (CLI and API responses).
//! The probe itself never consults it; it deals only in typed enums.

use crate::types::{AuthenticationType, SecurityLevel};

/// Bidirectional security-level label table
pub const SECURITY_LEVEL_LABELS: &[(SecurityLevel, &str)] = &[
    (SecurityLevel::None, "No secure lock"),
    (SecurityLevel::Secret, "PIN / passcode"),
    (SecurityLevel::BiometricWeak, "Weak biometric"),
    (SecurityLevel::BiometricStrong, "Strong biometric"),
];

/// Bidirectional modality label table
pub const AUTH_TYPE_LABELS: &[(AuthenticationType, &str)] = &[
    (AuthenticationType::Fingerprint, "Fingerprint"),
    (AuthenticationType::FacialRecognition, "Facial recognition"),
    (AuthenticationType::Iris, "Iris"),
];

/// Label for a security level
pub fn security_level_label(level: SecurityLevel) -> &'static str {
    SECURITY_LEVEL_LABELS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, s)| *s)
        .unwrap_or("Unknown")
}

/// Reverse lookup of a security-level label
pub fn security_level_from_label(label: &str) -> Option<SecurityLevel> {
    SECURITY_LEVEL_LABELS
        .iter()
        .find(|(_, s)| s.eq_ignore_ascii_case(label))
        .map(|(l, _)| *l)
}

/// Label for an authentication modality
pub fn auth_type_label(ty: AuthenticationType) -> &'static str {
    AUTH_TYPE_LABELS
        .iter()
        .find(|(t, _)| *t == ty)
        .map(|(_, s)| *s)
        .unwrap_or("Unknown")
}

/// Reverse lookup of a modality label
pub fn auth_type_from_label(label: &str) -> Option<AuthenticationType> {
    AUTH_TYPE_LABELS
        .iter()
        .find(|(_, s)| s.eq_ignore_ascii_case(label))
        .map(|(t, _)| *t)
}

/// Comma-joined modality labels for one-line display
pub fn modality_list(types: &[AuthenticationType]) -> String {
    if types.is_empty() {
        return "None".to_string();
    }
    types
        .iter()
        .map(|t| auth_type_label(*t))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for (level, label) in SECURITY_LEVEL_LABELS {
            assert_eq!(security_level_from_label(label), Some(*level));
        }
        for (ty, label) in AUTH_TYPE_LABELS {
            assert_eq!(auth_type_from_label(label), Some(*ty));
        }
    }

    #[test]
    fn test_reverse_lookup_case_insensitive() {
        assert_eq!(
            auth_type_from_label("facial recognition"),
            Some(AuthenticationType::FacialRecognition)
        );
        assert_eq!(auth_type_from_label("retina"), None);
    }

    #[test]
    fn test_modality_list() {
        assert_eq!(modality_list(&[]), "None");
        assert_eq!(
            modality_list(&[AuthenticationType::Fingerprint, AuthenticationType::Iris]),
            "Fingerprint, Iris"
        );
    }
}
