//! Integration tests for the probe lifecycle over a scripted platform

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use biogate::core::{BiometricProbe, MockAnswers, MockPlatform, ProbeConfig};
use biogate::types::{
    AuthReason, AuthenticationType, CapabilityQuery, ProbeError, ProbeState, SecurityLevel,
};

#[tokio::test]
async fn test_full_lifecycle_success() {
    let platform = Arc::new(MockPlatform::capable());
    let mut probe = BiometricProbe::new(platform.clone());

    let successes = Arc::new(AtomicU64::new(0));
    let hits = successes.clone();
    probe.on_success(move || {
        hits.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(probe.state(), ProbeState::Uninitialized);

    let snapshot = probe.initialize().await.unwrap();
    assert_eq!(probe.state(), ProbeState::Ready);
    assert!(snapshot.is_usable());
    assert_eq!(platform.query_calls(), 4);

    let outcome = probe.authenticate().await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.reason, AuthReason::A200_AUTH_SUCCESS);
    assert!(probe.authenticated());
    assert_eq!(successes.load(Ordering::Relaxed), 1);
    assert_eq!(platform.auth_calls(), 1);

    // Probe stays READY and is reusable
    assert_eq!(probe.state(), ProbeState::Ready);
    let again = probe.authenticate().await.unwrap();
    assert!(again.success);
    assert_eq!(successes.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn test_enrollment_query_failure_surfaces_cause() {
    let platform = Arc::new(MockPlatform::new(MockAnswers {
        failing_query: Some(CapabilityQuery::Enrollment),
        ..MockAnswers::default()
    }));
    let mut probe = BiometricProbe::new(platform.clone());

    let err = probe.initialize().await.unwrap_err();
    match err {
        ProbeError::Query { which, .. } => assert_eq!(which, CapabilityQuery::Enrollment),
        other => panic!("unexpected error: {other}"),
    }

    // Nothing published, probe still usable for a retry
    assert!(probe.snapshot().is_none());
    assert_eq!(probe.state(), ProbeState::Uninitialized);

    platform.set_answers(MockAnswers::default());
    let snapshot = probe.initialize().await.unwrap();
    assert!(snapshot.enrolled);
    assert_eq!(probe.state(), ProbeState::Ready);
}

#[tokio::test]
async fn test_reprobe_replaces_snapshot_wholesale() {
    let platform = Arc::new(MockPlatform::capable());
    let mut probe = BiometricProbe::new(platform.clone());

    let first = probe.initialize().await.unwrap();
    assert_eq!(first.security_level, SecurityLevel::BiometricStrong);

    // Device downgraded between probes
    platform.set_answers(MockAnswers {
        enrolled_level: SecurityLevel::BiometricWeak,
        supported_types: vec![AuthenticationType::FacialRecognition],
        ..MockAnswers::default()
    });

    let second = probe.initialize().await.unwrap();
    assert_eq!(second.security_level, SecurityLevel::BiometricWeak);
    assert_eq!(second.modalities, vec![AuthenticationType::FacialRecognition]);
    assert!(!probe.snapshot().unwrap().same_capabilities(&first));
    assert_eq!(probe.probe_count(), 2);
}

#[tokio::test]
async fn test_user_cancel_keeps_prior_authenticated_value() {
    let platform = Arc::new(MockPlatform::capable());
    let mut probe = BiometricProbe::new(platform.clone());

    let failures = Arc::new(AtomicU64::new(0));
    let hits = failures.clone();
    probe.on_error(move || {
        hits.fetch_add(1, Ordering::Relaxed);
    });

    probe.initialize().await.unwrap();

    // Cancel before any success: stays logged out
    platform.set_auth_succeeds(false);
    let outcome = probe.authenticate().await.unwrap();
    assert!(!outcome.success);
    assert!(!outcome.authenticated);
    assert_eq!(failures.load(Ordering::Relaxed), 1);

    // Success, then cancel: sticky success holds
    platform.set_auth_succeeds(true);
    probe.authenticate().await.unwrap();
    platform.set_auth_succeeds(false);
    let outcome = probe.authenticate().await.unwrap();
    assert!(!outcome.success);
    assert!(outcome.authenticated);
    assert!(probe.authenticated());
    assert_eq!(failures.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn test_reset_on_failure_config() {
    let platform = Arc::new(MockPlatform::capable());
    let mut probe = BiometricProbe::with_config(
        platform.clone(),
        ProbeConfig {
            reset_on_failure: true,
            ..ProbeConfig::default()
        },
    );

    probe.initialize().await.unwrap();
    probe.authenticate().await.unwrap();
    assert!(probe.authenticated());

    platform.set_auth_succeeds(false);
    probe.authenticate().await.unwrap();
    assert!(!probe.authenticated());
}

#[tokio::test]
async fn test_hardware_absent_end_to_end() {
    let mut probe = BiometricProbe::new(Arc::new(MockPlatform::no_hardware()));

    let snapshot = probe.initialize().await.unwrap();
    assert!(!snapshot.hardware_supported);
    assert!(!snapshot.enrolled);
    assert!(snapshot.modalities.is_empty());
    assert!(!snapshot.is_usable());

    // Challenge is still permitted; it just fails
    let outcome = probe.authenticate().await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.reason, AuthReason::A201_AUTH_FAILED);
}

#[tokio::test]
async fn test_subscription_sees_whole_lifecycle() {
    let mut probe = BiometricProbe::new(Arc::new(MockPlatform::capable()));
    let mut rx = probe.subscribe();

    probe.initialize().await.unwrap();
    probe.authenticate().await.unwrap();

    let mut states = Vec::new();
    while let Ok(update) = rx.try_recv() {
        states.push((update.state, update.auth_phase, update.loading, update.authenticated));
    }

    // PROBING(loading) -> READY -> AUTHENTICATING -> READY(authenticated)
    assert_eq!(states.len(), 4);
    assert!(states[0].2, "first update is the loading interval");
    assert_eq!(states[1].0, ProbeState::Ready);
    assert_eq!(
        states[2].1,
        biogate::types::AuthPhase::Authenticating,
        "challenge interval is observable"
    );
    assert!(states[3].3, "final update carries authenticated = true");
}
