//! Probe state definitions

use serde::{Deserialize, Serialize};

/// The lifecycle states of a BiometricProbe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeState {
    /// No capability snapshot has been published yet
    Uninitialized,
    /// Capability queries in flight, loading flag is set
    Probing,
    /// Snapshot published, authenticate is available
    Ready,
}

/// Orthogonal sub-state tracking the interactive challenge.
///
/// Entered from READY on authenticate(), left on completion regardless
/// of outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthPhase {
    /// No challenge in flight
    Idle,
    /// Platform challenge outstanding
    Authenticating,
}

impl ProbeState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            ProbeState::Uninitialized => "\x1b[90m", // Gray
            ProbeState::Probing => "\x1b[33m",       // Yellow
            ProbeState::Ready => "\x1b[32m",         // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for ProbeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProbeState::Uninitialized => "UNINITIALIZED",
            ProbeState::Probing => "PROBING",
            ProbeState::Ready => "READY",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthPhase::Idle => "IDLE",
            AuthPhase::Authenticating => "AUTHENTICATING",
        };
        write!(f, "{}", name)
    }
}
