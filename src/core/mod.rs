//! Core modules for biogate

pub mod api;
pub mod host;
pub mod mock;
pub mod platform;
pub mod probe;

pub use api::{create_router, router_with_state, run_server, AppState};
pub use host::HostPlatform;
pub use mock::{MockAnswers, MockPlatform};
pub use platform::{AuthOptions, BiometricPlatform};
pub use probe::{AuthCallback, BiometricProbe, ProbeConfig, ProbeUpdate};
