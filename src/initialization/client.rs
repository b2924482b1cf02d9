//! HTTP client initialization.

use log::warn;
use reqwest::ClientBuilder;

use crate::config::{Config, USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by every request of a run.
///
/// Creates a `reqwest::Client` configured with:
/// - The fixed `TamperBay` User-Agent
/// - Certificate verification disabled unless `--verify-tls` was given,
///   so self-signed and otherwise invalid certificates are accepted
/// - Redirect following with reqwest's default policy (up to 10 hops)
/// - Rustls TLS backend
///
/// No client-wide timeout is set: the deadline is applied per request by the
/// dispatcher.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    if !config.verify_tls {
        warn!("TLS certificate verification is disabled; pass --verify-tls to enable it");
    }

    let client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()?;
    Ok(client)
}
