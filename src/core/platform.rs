//! Platform biometrics boundary
//!
//! The five operations a host biometrics subsystem must provide. Everything
//! above this trait is platform-independent; the probe only ever talks to a
//! `dyn BiometricPlatform`.

use async_trait::async_trait;

use crate::types::{AuthResult, AuthenticationType, PlatformError, SecurityLevel};

/// Options passed to the interactive challenge.
///
/// The default supplies nothing, leaving prompt text and cancel labels to
/// the platform.
#[derive(Debug, Clone, Default)]
pub struct AuthOptions {
    /// Prompt message shown in the system dialog
    pub prompt_message: Option<String>,
    /// Label for the cancel affordance
    pub cancel_label: Option<String>,
    /// Ask the platform to require a confirmation step after a match
    pub require_confirmation: bool,
}

/// Host biometrics API.
///
/// Uses `async-trait` for object safety (`dyn BiometricPlatform`).
#[async_trait]
pub trait BiometricPlatform: Send + Sync {
    /// Does the device have biometric hardware?
    async fn has_hardware(&self) -> Result<bool, PlatformError>;

    /// Has the user enrolled at least one biometric credential?
    async fn is_enrolled(&self) -> Result<bool, PlatformError>;

    /// Highest security level the user has enrolled
    async fn enrolled_level(&self) -> Result<SecurityLevel, PlatformError>;

    /// Modalities the hardware supports
    async fn supported_authentication_types(&self) -> Result<Vec<AuthenticationType>, PlatformError>;

    /// Run the interactive challenge. Cancellation, lockout, no match and
    /// no enrolled credential all come back as `success = false`; `Err` is
    /// reserved for platform-level failures.
    async fn authenticate(&self, options: AuthOptions) -> Result<AuthResult, PlatformError>;
}
