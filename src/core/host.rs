//! Best-effort host platform probe
//!
//! Platform coverage:
//! - macOS: Touch ID availability via `bioutil`
//! - everything else: reports no biometric hardware
//!
//! The host backend cannot drive an interactive challenge from a plain
//! process, so `authenticate` always reports failure. It exists so the CLI
//! gives honest capability answers on a developer machine; real challenges
//! go through a device-side platform implementation.

use async_trait::async_trait;

use crate::core::{AuthOptions, BiometricPlatform};
use crate::types::{AuthResult, AuthenticationType, PlatformError, SecurityLevel};

/// BiometricPlatform backed by the local host
#[derive(Debug, Default)]
pub struct HostPlatform;

impl HostPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use tokio::process::Command;

    /// Check Touch ID availability by querying bioutil
    pub async fn hardware_available() -> bool {
        Command::new("bioutil")
            .args(["--read"])
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// bioutil reports "Biometrics functionality: 1" when a user can unlock
    /// with Touch ID, which implies an enrolled fingerprint.
    pub async fn enrolled() -> bool {
        let output = match Command::new("bioutil").args(["--read"]).output().await {
            Ok(o) if o.status.success() => o,
            _ => return false,
        };
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines()
            .any(|line| line.contains("functionality") && line.trim_end().ends_with('1'))
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    pub async fn hardware_available() -> bool {
        false
    }

    pub async fn enrolled() -> bool {
        false
    }
}

#[async_trait]
impl BiometricPlatform for HostPlatform {
    async fn has_hardware(&self) -> Result<bool, PlatformError> {
        Ok(imp::hardware_available().await)
    }

    async fn is_enrolled(&self) -> Result<bool, PlatformError> {
        Ok(imp::enrolled().await)
    }

    async fn enrolled_level(&self) -> Result<SecurityLevel, PlatformError> {
        if imp::enrolled().await {
            // Touch ID is a strong-class biometric
            Ok(SecurityLevel::BiometricStrong)
        } else if imp::hardware_available().await {
            Ok(SecurityLevel::Secret)
        } else {
            Ok(SecurityLevel::None)
        }
    }

    async fn supported_authentication_types(&self) -> Result<Vec<AuthenticationType>, PlatformError> {
        if imp::hardware_available().await {
            Ok(vec![AuthenticationType::Fingerprint])
        } else {
            Ok(vec![])
        }
    }

    async fn authenticate(&self, _options: AuthOptions) -> Result<AuthResult, PlatformError> {
        // No system prompt is reachable from a plain process
        tracing::warn!("host backend cannot run an interactive challenge");
        Ok(AuthResult::failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_host_queries_do_not_error() {
        let platform = HostPlatform::new();
        let _ = platform.has_hardware().await.unwrap();
        let _ = platform.is_enrolled().await.unwrap();
        let _ = platform.enrolled_level().await.unwrap();
        let _ = platform.supported_authentication_types().await.unwrap();
    }

    #[tokio::test]
    async fn test_host_challenge_always_fails() {
        let platform = HostPlatform::new();
        let result = platform.authenticate(AuthOptions::default()).await.unwrap();
        assert!(!result.success);
    }
}
