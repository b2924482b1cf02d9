//! Target validation and normalization.

use std::fmt;

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ConfigError;

/// The host every request of a run is sent to.
///
/// Built once by [`normalize_target`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    normalized: String,
    url: Url,
}

impl Target {
    /// The normalized target as given by the user plus any added scheme.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The parsed URL handed to the HTTP client.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Validates and normalizes a user-supplied host or URL.
///
/// Adds the `https://` prefix if neither `http://` nor `https://` is present,
/// then checks that the result parses as a URL with a host.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTarget` if the input is too long, does not
/// parse or has no host.
pub fn normalize_target(raw: &str) -> Result<Target, ConfigError> {
    let raw = raw.trim();

    let normalized = if !raw.starts_with("http://") && !raw.starts_with("https://") {
        format!("https://{raw}")
    } else {
        raw.to_string()
    };

    // Checked after normalization, the added prefix counts towards the limit
    if normalized.len() > MAX_URL_LENGTH {
        return Err(ConfigError::InvalidTarget {
            target: normalized.chars().take(50).collect(),
            reason: format!(
                "exceeds maximum length ({} > {})",
                normalized.len(),
                MAX_URL_LENGTH
            ),
        });
    }

    let url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidTarget {
        target: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidTarget {
            target: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(Target { normalized, url })
}
