//! HTTP header name constants.
//!
//! Header lookups go through `reqwest::header::HeaderMap`, which is
//! case-insensitive, so the canonical spelling is kept here for log output.

/// Methods advertised by the endpoint (inspected on OPTIONS responses)
pub const HEADER_ALLOW: &str = "Allow";
/// Intermediary proxy chain (inspected on TRACE responses)
pub const HEADER_VIA: &str = "Via";
