// Shared test helpers for stub-server based tests.

use httptest::Server;

use tamperbay::{normalize_target, Config, Target};

/// Normalized target pointing at the root of a stub server.
#[allow(dead_code)] // Used by other test files
pub fn stub_target(server: &Server) -> Target {
    normalize_target(&server.url("/").to_string()).expect("stub URL should be a valid target")
}

/// Config aimed at a stub server with no pacing and a short deadline.
#[allow(dead_code)] // Used by other test files
pub fn stub_config(server: &Server, timeout_seconds: u64) -> Config {
    Config {
        target: Some(server.url("/").to_string()),
        timeout_seconds,
        pace_ms: 0,
        ..Default::default()
    }
}
