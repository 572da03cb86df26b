//! HTTP + WebSocket API for biogate
//!
//! Endpoints:
//! - GET  /health       - Health check
//! - POST /probe        - Run a capability probe cycle
//! - GET  /status       - Current probe state and snapshot
//! - POST /authenticate - Run one interactive challenge
//! - WS   /ws           - Live probe updates

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{BiometricPlatform, BiometricProbe, ProbeConfig, ProbeUpdate};
use crate::types::label::{modality_list, security_level_label};
use crate::types::{AuthPhase, CapabilitySnapshot, ProbeError, ProbeState};

/// App state: one probe shared across requests
pub struct AppState {
    pub probe: RwLock<BiometricProbe>,
}

impl AppState {
    pub fn new(platform: Arc<dyn BiometricPlatform>, config: ProbeConfig) -> Self {
        Self {
            probe: RwLock::new(BiometricProbe::with_config(platform, config)),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub state: ProbeState,
}

/// Probe response
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub snapshot: CapabilitySnapshot,
    pub probe_count: u64,
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: ProbeState,
    pub auth_phase: AuthPhase,
    pub loading: bool,
    pub authenticated: bool,
    pub snapshot: Option<CapabilitySnapshot>,
    /// Display labels, resolved here rather than in the probe
    pub security_level_label: Option<String>,
    pub modalities_label: Option<String>,
}

/// Authenticate response
#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub success: bool,
    pub authenticated: bool,
    pub reason: String,
}

/// Create the API router over a platform backend
pub fn create_router(platform: Arc<dyn BiometricPlatform>, config: ProbeConfig) -> Router {
    router_with_state(Arc::new(AppState::new(platform, config)))
}

/// Create the API router over pre-built state (used by tests that need to
/// reach the probe directly)
pub fn router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/probe", post(run_probe))
        .route("/status", get(status))
        .route("/authenticate", post(authenticate))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let probe = state.probe.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        state: probe.state(),
    })
}

/// Run one capability probe cycle
async fn run_probe(State(state): State<Arc<AppState>>) -> Result<Json<ProbeResponse>, StatusCode> {
    let mut probe = state.probe.write().await;
    match probe.initialize().await {
        Ok(snapshot) => Ok(Json(ProbeResponse {
            snapshot,
            probe_count: probe.probe_count(),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "probe request failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Current probe state and snapshot
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let probe = state.probe.read().await;
    let update = probe.current_update();
    let security_level_label = update
        .snapshot
        .as_ref()
        .map(|s| security_level_label(s.security_level).to_string());
    let modalities_label = update
        .snapshot
        .as_ref()
        .map(|s| modality_list(&s.modalities));

    Json(StatusResponse {
        state: update.state,
        auth_phase: update.auth_phase,
        loading: update.loading,
        authenticated: update.authenticated,
        snapshot: update.snapshot,
        security_level_label,
        modalities_label,
    })
}

/// Run one interactive challenge.
///
/// A second request while a challenge is outstanding is rejected 409 rather
/// than queued; the probe instance never sees overlapping calls.
async fn authenticate(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuthenticateResponse>, StatusCode> {
    let mut probe = match state.probe.try_write() {
        Ok(guard) => guard,
        Err(_) => return Err(StatusCode::CONFLICT),
    };

    match probe.authenticate().await {
        Ok(outcome) => Ok(Json(AuthenticateResponse {
            success: outcome.success,
            authenticated: outcome.authenticated,
            reason: outcome.reason.code().to_string(),
        })),
        Err(ProbeError::NotInitialized) => Err(StatusCode::BAD_REQUEST),
        Err(e) => {
            tracing::warn!(error = %e, "authenticate request failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let rx = state.probe.read().await.subscribe();
    ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    })
}

/// Forward probe updates over a WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<ProbeUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    platform: Arc<dyn BiometricPlatform>,
    config: ProbeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(platform, config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("biogate API running on {}", addr);
    println!("  GET  /health       - Health check");
    println!("  POST /probe        - Run capability probe");
    println!("  GET  /status       - Probe state + snapshot");
    println!("  POST /authenticate - Run challenge");
    println!("  WS   /ws           - Live updates");
    axum::serve(listener, router).await?;
    Ok(())
}
