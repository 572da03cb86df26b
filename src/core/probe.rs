//! BiometricProbe: capability probe and authentication gate
//!
//! Lifecycle:
//! - UNINITIALIZED -> PROBING -> READY via initialize()
//! - orthogonal AUTHENTICATING sub-state during authenticate(), both
//!   outcomes return to READY
//!
//! The probe is reusable indefinitely: re-probe overwrites the snapshot
//! wholesale, and authenticate may be called any number of times from READY.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::core::{AuthOptions, BiometricPlatform};
use crate::types::{
    AuthOutcome, AuthPhase, CapabilityQuery, CapabilitySnapshot, ProbeError, ProbeResult,
    ProbeState,
};
use crate::UPDATE_CHANNEL_CAPACITY;

/// Hook invoked after an authenticate outcome
pub type AuthCallback = Box<dyn Fn() + Send + Sync>;

/// Probe behavior knobs
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Clear `authenticated` after a failed challenge. Off by default:
    /// a prior successful unlock sticks across later failed attempts.
    pub reset_on_failure: bool,
    /// Options forwarded to every platform challenge
    pub options: AuthOptions,
}

/// Observable probe state, broadcast on every change
#[derive(Debug, Clone, Serialize)]
pub struct ProbeUpdate {
    pub state: ProbeState,
    pub auth_phase: AuthPhase,
    pub loading: bool,
    pub authenticated: bool,
    pub snapshot: Option<CapabilitySnapshot>,
}

/// Bridge to the device biometrics subsystem
pub struct BiometricProbe {
    platform: Arc<dyn BiometricPlatform>,
    config: ProbeConfig,
    state: ProbeState,
    auth_phase: AuthPhase,
    loading: bool,
    authenticated: bool,
    snapshot: Option<CapabilitySnapshot>,
    probe_count: u64,
    on_success: Option<AuthCallback>,
    on_error: Option<AuthCallback>,
    update_tx: broadcast::Sender<ProbeUpdate>,
}

impl BiometricProbe {
    /// Create a probe over a platform backend with default config
    pub fn new(platform: Arc<dyn BiometricPlatform>) -> Self {
        Self::with_config(platform, ProbeConfig::default())
    }

    pub fn with_config(platform: Arc<dyn BiometricPlatform>, config: ProbeConfig) -> Self {
        let (update_tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            platform,
            config,
            state: ProbeState::Uninitialized,
            auth_phase: AuthPhase::Idle,
            loading: false,
            authenticated: false,
            snapshot: None,
            probe_count: 0,
            on_success: None,
            on_error: None,
            update_tx,
        }
    }

    /// Register a hook fired exactly once per successful challenge
    pub fn on_success<F: Fn() + Send + Sync + 'static>(&mut self, f: F) {
        self.on_success = Some(Box::new(f));
    }

    /// Register a hook fired exactly once per failed challenge
    pub fn on_error<F: Fn() + Send + Sync + 'static>(&mut self, f: F) {
        self.on_error = Some(Box::new(f));
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<ProbeUpdate> {
        self.update_tx.subscribe()
    }

    /// Run the four capability queries and publish the snapshot atomically.
    ///
    /// On any query failure nothing is published: the previous snapshot (if
    /// any) is retained, `loading` is cleared, and the error names the query
    /// that failed plus the platform-reported cause.
    pub async fn initialize(&mut self) -> ProbeResult<CapabilitySnapshot> {
        self.loading = true;
        self.state = ProbeState::Probing;
        self.publish();

        let result = self.run_queries().await;
        self.loading = false;

        match result {
            Ok(snapshot) => {
                tracing::info!(
                    hardware = snapshot.hardware_supported,
                    enrolled = snapshot.enrolled,
                    level = %snapshot.security_level,
                    "capability probe complete"
                );
                self.snapshot = Some(snapshot.clone());
                self.state = ProbeState::Ready;
                self.probe_count += 1;
                self.publish();
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "capability probe failed");
                self.state = if self.snapshot.is_some() {
                    ProbeState::Ready
                } else {
                    ProbeState::Uninitialized
                };
                self.publish();
                Err(e)
            }
        }
    }

    async fn run_queries(&self) -> ProbeResult<CapabilitySnapshot> {
        let query = |which| move |source| ProbeError::Query { which, source };

        let hardware = self
            .platform
            .has_hardware()
            .await
            .map_err(query(CapabilityQuery::HardwareSupport))?;
        let enrolled = self
            .platform
            .is_enrolled()
            .await
            .map_err(query(CapabilityQuery::Enrollment))?;
        let level = self
            .platform
            .enrolled_level()
            .await
            .map_err(query(CapabilityQuery::SecurityLevel))?;
        let types = self
            .platform
            .supported_authentication_types()
            .await
            .map_err(query(CapabilityQuery::SupportedTypes))?;

        Ok(CapabilitySnapshot::new(hardware, enrolled, level, types))
    }

    /// Run one interactive challenge with the configured options.
    ///
    /// Success sets `authenticated` and fires the success hook once. A clean
    /// failure leaves `authenticated` at its prior value (or clears it when
    /// `reset_on_failure` is set) and fires the failure hook once. Neither
    /// hook fires on a platform-level challenge error.
    pub async fn authenticate(&mut self) -> ProbeResult<AuthOutcome> {
        if self.state != ProbeState::Ready {
            return Err(ProbeError::NotInitialized);
        }
        if self.auth_phase == AuthPhase::Authenticating {
            // Single-owner callers cannot reach this; shared-probe seams
            // (the HTTP layer) serialize on it.
            return Ok(AuthOutcome::busy(self.authenticated));
        }

        self.auth_phase = AuthPhase::Authenticating;
        self.publish();

        let result = self.platform.authenticate(self.config.options.clone()).await;
        self.auth_phase = AuthPhase::Idle;

        let result = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "challenge errored at platform level");
                self.publish();
                return Err(ProbeError::Challenge(e));
            }
        };

        let outcome = if result.success {
            self.authenticated = true;
            if let Some(cb) = &self.on_success {
                cb();
            }
            AuthOutcome::succeeded()
        } else {
            if self.config.reset_on_failure {
                self.authenticated = false;
            }
            if let Some(cb) = &self.on_error {
                cb();
            }
            AuthOutcome::failed(self.authenticated)
        };

        tracing::info!(success = outcome.success, reason = outcome.reason.code(), "challenge finished");
        self.publish();
        Ok(outcome)
    }

    /// Get current state
    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Is an initialize() in flight?
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Has the most recent applied challenge succeeded?
    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    /// Latest published snapshot, if any
    pub fn snapshot(&self) -> Option<&CapabilitySnapshot> {
        self.snapshot.as_ref()
    }

    /// Completed probe cycles
    pub fn probe_count(&self) -> u64 {
        self.probe_count
    }

    /// Current observable state without waiting for a change
    pub fn current_update(&self) -> ProbeUpdate {
        ProbeUpdate {
            state: self.state,
            auth_phase: self.auth_phase,
            loading: self.loading,
            authenticated: self.authenticated,
            snapshot: self.snapshot.clone(),
        }
    }

    fn publish(&self) {
        let _ = self.update_tx.send(self.current_update());
    }
}

// =============================================================================
// TESTS
// =============================================================================
