//! Error categorization.

use super::types::{DispatchError, ErrorType};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts are checked before connect errors: a connect that times out is
/// reported by reqwest as both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a failed dispatch.
pub fn categorize_dispatch_error(error: &DispatchError) -> ErrorType {
    match error {
        DispatchError::Timeout { .. } => ErrorType::HttpRequestTimeoutError,
        DispatchError::Build { .. } => ErrorType::HttpRequestBuilderError,
        DispatchError::Body { source, .. } => match categorize_reqwest_error(source) {
            ErrorType::HttpRequestTimeoutError => ErrorType::HttpRequestTimeoutError,
            ErrorType::HttpRequestDecodeError => ErrorType::HttpRequestDecodeError,
            _ => ErrorType::HttpRequestBodyError,
        },
        DispatchError::Send { source, .. } => categorize_reqwest_error(source),
    }
}
