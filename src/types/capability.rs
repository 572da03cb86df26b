//! Capability enums reported by the platform biometrics API

use serde::{Deserialize, Serialize};

/// Highest security level the user has enrolled on the device.
///
/// Ordering is meaningful: `BiometricStrong` > `BiometricWeak` > `Secret` > `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityLevel {
    /// No secure lock configured at all
    None,
    /// Non-biometric secret (PIN, pattern, passcode)
    Secret,
    /// Biometric that does not meet strong-class requirements
    BiometricWeak,
    /// Strong-class biometric
    BiometricStrong,
}

impl SecurityLevel {
    /// Numeric code used by the platform wire protocol
    pub fn code(&self) -> u8 {
        match self {
            SecurityLevel::None => 0,
            SecurityLevel::Secret => 1,
            SecurityLevel::BiometricWeak => 2,
            SecurityLevel::BiometricStrong => 3,
        }
    }

    /// Decode a platform numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SecurityLevel::None),
            1 => Some(SecurityLevel::Secret),
            2 => Some(SecurityLevel::BiometricWeak),
            3 => Some(SecurityLevel::BiometricStrong),
            _ => None,
        }
    }

    /// Is this level biometric at all?
    pub fn is_biometric(&self) -> bool {
        matches!(self, SecurityLevel::BiometricWeak | SecurityLevel::BiometricStrong)
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SecurityLevel::None => "NONE",
            SecurityLevel::Secret => "SECRET",
            SecurityLevel::BiometricWeak => "BIOMETRIC_WEAK",
            SecurityLevel::BiometricStrong => "BIOMETRIC_STRONG",
        };
        write!(f, "{}", name)
    }
}

/// Authentication modality supported by the device hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    /// Fingerprint sensor (Touch ID, rear/side sensors)
    Fingerprint,
    /// Face-based recognition (Face ID and equivalents)
    FacialRecognition,
    /// Iris scanner
    Iris,
}

impl AuthenticationType {
    /// Numeric code used by the platform wire protocol
    pub fn code(&self) -> u8 {
        match self {
            AuthenticationType::Fingerprint => 1,
            AuthenticationType::FacialRecognition => 2,
            AuthenticationType::Iris => 3,
        }
    }

    /// Decode a platform numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AuthenticationType::Fingerprint),
            2 => Some(AuthenticationType::FacialRecognition),
            3 => Some(AuthenticationType::Iris),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuthenticationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthenticationType::Fingerprint => "FINGERPRINT",
            AuthenticationType::FacialRecognition => "FACIAL_RECOGNITION",
            AuthenticationType::Iris => "IRIS",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_level_ordering() {
        assert!(SecurityLevel::BiometricStrong > SecurityLevel::BiometricWeak);
        assert!(SecurityLevel::BiometricWeak > SecurityLevel::Secret);
        assert!(SecurityLevel::Secret > SecurityLevel::None);
    }

    #[test]
    fn test_security_level_codes_round_trip() {
        for level in [
            SecurityLevel::None,
            SecurityLevel::Secret,
            SecurityLevel::BiometricWeak,
            SecurityLevel::BiometricStrong,
        ] {
            assert_eq!(SecurityLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(SecurityLevel::from_code(9), None);
    }

    #[test]
    fn test_auth_type_codes() {
        assert_eq!(AuthenticationType::Fingerprint.code(), 1);
        assert_eq!(AuthenticationType::from_code(2), Some(AuthenticationType::FacialRecognition));
        assert_eq!(AuthenticationType::from_code(0), None);
    }

    #[test]
    fn test_serde_screaming_snake() {
        let json = serde_json::to_string(&SecurityLevel::BiometricStrong).unwrap();
        assert_eq!(json, "\"BIOMETRIC_STRONG\"");
        let json = serde_json::to_string(&AuthenticationType::FacialRecognition).unwrap();
        assert_eq!(json, "\"FACIAL_RECOGNITION\"");
    }
}
