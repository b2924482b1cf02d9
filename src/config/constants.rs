//! Configuration constants.
//!
//! This module defines the fixed wire values and the defaults used when the
//! corresponding CLI flags are not given.

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "TamperBay";

/// Literal payload attached to POST and PUT requests.
pub const REQUEST_BODY: &str = "verb=tampering";

/// Default per-request deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Default pause between consecutive requests in milliseconds.
pub const DEFAULT_PACE_MS: u64 = 1000;

/// Status returned by a proxy that requires authentication before tunnelling.
pub const HTTP_STATUS_PROXY_AUTH_REQUIRED: u16 = 407;

/// Maximum accepted length of the target URL.
pub const MAX_URL_LENGTH: usize = 2048;
