//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::method::TamperMethod;

/// Error types for invalid run configuration.
///
/// All of these are detected before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No target was given with `-u`.
    #[error("Must provide a hostname or IP (-u)")]
    MissingTarget,

    /// The target could not be turned into an http(s) URL.
    #[error("Invalid target {target}: {reason}")]
    InvalidTarget {
        /// The offending input
        target: String,
        /// Why it was rejected
        reason: String,
    },

    /// A zero deadline would fail every request immediately.
    #[error("Timeout must be greater than zero seconds")]
    ZeroTimeout,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for a single dispatched request.
///
/// The dispatcher only reports these; whether they end the run is decided by
/// the orchestrator's failure policy.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The request could not be constructed.
    #[error("Could not create {method} request")]
    Build {
        /// Method being dispatched
        method: TamperMethod,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The request failed before a response arrived (network, TLS, redirects).
    #[error("{method} response not received")]
    Send {
        /// Method being dispatched
        method: TamperMethod,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The deadline elapsed before the response body was fully read.
    #[error("{method} request timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// Method being dispatched
        method: TamperMethod,
        /// Deadline that was exceeded
        timeout: Duration,
    },

    /// The response body could not be read.
    #[error("Could not read {method} response body")]
    Body {
        /// Method being dispatched
        method: TamperMethod,
        /// Underlying client error
        source: ReqwestError,
    },
}

/// Categories of request failures, used for log output and failure tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be built
    HttpRequestBuilderError,
    /// Redirect handling failed
    HttpRequestRedirectError,
    /// The connection (TCP or TLS) could not be established
    HttpRequestConnectError,
    /// The per-request deadline elapsed
    HttpRequestTimeoutError,
    /// The request failed while being sent
    HttpRequestRequestError,
    /// The response body could not be read
    HttpRequestBodyError,
    /// The response could not be decoded
    HttpRequestDecodeError,
    /// Anything the client does not classify
    HttpRequestOtherError,
}

impl ErrorType {
    /// Human-readable label for summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP response body error",
            ErrorType::HttpRequestDecodeError => "HTTP response decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
