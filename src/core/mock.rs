//! Scriptable in-memory platform for tests and simulation
//!
//! Answers are fixed at construction (or mutated between calls), each of the
//! five operations counts its invocations, and any capability query can be
//! made to fail.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::{AuthOptions, BiometricPlatform};
use crate::types::{AuthResult, AuthenticationType, CapabilityQuery, PlatformError, SecurityLevel};

/// Scripted answers for one MockPlatform
#[derive(Debug, Clone)]
pub struct MockAnswers {
    pub has_hardware: bool,
    pub is_enrolled: bool,
    pub enrolled_level: SecurityLevel,
    pub supported_types: Vec<AuthenticationType>,
    /// Outcome of the next challenge
    pub auth_succeeds: bool,
    /// Query that should fail instead of answering, if any
    pub failing_query: Option<CapabilityQuery>,
    /// Make authenticate() itself return a platform error
    pub auth_errors: bool,
}

impl Default for MockAnswers {
    fn default() -> Self {
        Self {
            has_hardware: true,
            is_enrolled: true,
            enrolled_level: SecurityLevel::BiometricStrong,
            supported_types: vec![AuthenticationType::Fingerprint],
            auth_succeeds: true,
            failing_query: None,
            auth_errors: false,
        }
    }
}

/// In-memory BiometricPlatform implementation for testing
pub struct MockPlatform {
    answers: Mutex<MockAnswers>,
    hardware_calls: AtomicU64,
    enrollment_calls: AtomicU64,
    level_calls: AtomicU64,
    types_calls: AtomicU64,
    auth_calls: AtomicU64,
}

impl MockPlatform {
    pub fn new(answers: MockAnswers) -> Self {
        Self {
            answers: Mutex::new(answers),
            hardware_calls: AtomicU64::new(0),
            enrollment_calls: AtomicU64::new(0),
            level_calls: AtomicU64::new(0),
            types_calls: AtomicU64::new(0),
            auth_calls: AtomicU64::new(0),
        }
    }

    /// Fully-capable device whose next challenge succeeds
    pub fn capable() -> Self {
        Self::new(MockAnswers::default())
    }

    /// Device with no biometric hardware at all
    pub fn no_hardware() -> Self {
        Self::new(MockAnswers {
            has_hardware: false,
            is_enrolled: false,
            enrolled_level: SecurityLevel::Secret,
            supported_types: vec![],
            auth_succeeds: false,
            ..MockAnswers::default()
        })
    }

    /// Replace the scripted answers between calls
    pub fn set_answers(&self, answers: MockAnswers) {
        *self.answers.lock().unwrap() = answers;
    }

    /// Flip the outcome of the next challenge
    pub fn set_auth_succeeds(&self, succeeds: bool) {
        self.answers.lock().unwrap().auth_succeeds = succeeds;
    }

    pub fn auth_calls(&self) -> u64 {
        self.auth_calls.load(Ordering::Relaxed)
    }

    /// Total capability-query invocations across all four queries
    pub fn query_calls(&self) -> u64 {
        self.hardware_calls.load(Ordering::Relaxed)
            + self.enrollment_calls.load(Ordering::Relaxed)
            + self.level_calls.load(Ordering::Relaxed)
            + self.types_calls.load(Ordering::Relaxed)
    }

    fn answers(&self) -> MockAnswers {
        self.answers.lock().unwrap().clone()
    }

    fn fail_if_scripted(&self, query: CapabilityQuery) -> Result<(), PlatformError> {
        if self.answers().failing_query == Some(query) {
            return Err(PlatformError::Internal(format!("scripted failure of {} query", query)));
        }
        Ok(())
    }
}

#[async_trait]
impl BiometricPlatform for MockPlatform {
    async fn has_hardware(&self) -> Result<bool, PlatformError> {
        self.hardware_calls.fetch_add(1, Ordering::Relaxed);
        self.fail_if_scripted(CapabilityQuery::HardwareSupport)?;
        Ok(self.answers().has_hardware)
    }

    async fn is_enrolled(&self) -> Result<bool, PlatformError> {
        self.enrollment_calls.fetch_add(1, Ordering::Relaxed);
        self.fail_if_scripted(CapabilityQuery::Enrollment)?;
        Ok(self.answers().is_enrolled)
    }

    async fn enrolled_level(&self) -> Result<SecurityLevel, PlatformError> {
        self.level_calls.fetch_add(1, Ordering::Relaxed);
        self.fail_if_scripted(CapabilityQuery::SecurityLevel)?;
        Ok(self.answers().enrolled_level)
    }

    async fn supported_authentication_types(&self) -> Result<Vec<AuthenticationType>, PlatformError> {
        self.types_calls.fetch_add(1, Ordering::Relaxed);
        self.fail_if_scripted(CapabilityQuery::SupportedTypes)?;
        Ok(self.answers().supported_types)
    }

    async fn authenticate(&self, _options: AuthOptions) -> Result<AuthResult, PlatformError> {
        self.auth_calls.fetch_add(1, Ordering::Relaxed);
        let answers = self.answers();
        if answers.auth_errors {
            return Err(PlatformError::Internal("scripted challenge error".to_string()));
        }
        Ok(AuthResult {
            success: answers.auth_succeeds,
        })
    }
}
