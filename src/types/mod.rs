//! Core types for biogate

mod capability;
mod error;
mod outcome;
mod snapshot;
mod state;

pub mod label;

pub use capability::{AuthenticationType, SecurityLevel};
pub use error::{CapabilityQuery, PlatformError, ProbeError, ProbeResult};
pub use outcome::{AuthOutcome, AuthReason, AuthResult};
pub use snapshot::CapabilitySnapshot;
pub use state::{AuthPhase, ProbeState};
