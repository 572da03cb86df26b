//! Authentication results and outcomes
//!
//! The platform reports a bare `{ success }`. The probe wraps that into an
//! `AuthOutcome` carrying the reason code and the resulting `authenticated`
//! value, which is what the CLI/API layers display.

use serde::{Deserialize, Serialize};

/// Raw result of one platform authentication challenge.
///
/// User cancellation, lockout, no match and no enrolled credential all
/// surface as `success = false`, not as platform errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
}

impl AuthResult {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}

/// Outcome of one probe-level authenticate() call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Did this challenge succeed?
    pub success: bool,
    /// Probe's `authenticated` state after applying this outcome
    pub authenticated: bool,
    /// Reason code
    pub reason: AuthReason,
}

impl AuthOutcome {
    /// Successful challenge
    pub fn succeeded() -> Self {
        Self {
            success: true,
            authenticated: true,
            reason: AuthReason::A200_AUTH_SUCCESS,
        }
    }

    /// Failed challenge; `authenticated` carries the post-failure state
    /// (prior value under sticky-success, false when reset-on-failure is set)
    pub fn failed(authenticated: bool) -> Self {
        Self {
            success: false,
            authenticated,
            reason: AuthReason::A201_AUTH_FAILED,
        }
    }

    /// Rejected because a challenge was already in flight
    pub fn busy(authenticated: bool) -> Self {
        Self {
            success: false,
            authenticated,
            reason: AuthReason::A202_AUTH_BUSY,
        }
    }
}

/// Reason codes for authenticate outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum AuthReason {
    /// Platform challenge succeeded
    A200_AUTH_SUCCESS,
    /// Platform challenge failed (cancel, lockout, no match, no credential)
    A201_AUTH_FAILED,
    /// Another challenge already in flight, call rejected
    A202_AUTH_BUSY,
}

impl AuthReason {
    /// Get code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::A200_AUTH_SUCCESS => "A200_AUTH_SUCCESS",
            Self::A201_AUTH_FAILED => "A201_AUTH_FAILED",
            Self::A202_AUTH_BUSY => "A202_AUTH_BUSY",
        }
    }

    /// Get description
    pub fn description(&self) -> &'static str {
        match self {
            Self::A200_AUTH_SUCCESS => "Challenge succeeded",
            Self::A201_AUTH_FAILED => "Challenge failed (cancel, lockout, no match, or no credential)",
            Self::A202_AUTH_BUSY => "Challenge already in flight",
        }
    }
}

impl std::fmt::Display for AuthReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_sets_authenticated() {
        let outcome = AuthOutcome::succeeded();
        assert!(outcome.success);
        assert!(outcome.authenticated);
        assert_eq!(outcome.reason, AuthReason::A200_AUTH_SUCCESS);
    }

    #[test]
    fn test_failed_carries_prior_state() {
        assert!(AuthOutcome::failed(true).authenticated);
        assert!(!AuthOutcome::failed(false).authenticated);
        assert!(!AuthOutcome::failed(true).success);
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(AuthReason::A202_AUTH_BUSY.code(), "A202_AUTH_BUSY");
    }
}
