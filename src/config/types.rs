//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::app::url::{normalize_target, Target};
use crate::config::constants::{DEFAULT_PACE_MS, DEFAULT_TIMEOUT_SECS};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What the orchestrator does when a single request fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run at the first failed request.
    Abort,
    /// Log and record the failure, then move on to the next method.
    Continue,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or built programmatically via
/// `Default` when the crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use tamperbay::Config;
///
/// let config = Config {
///     target: Some("example.com".to_string()),
///     timeout_seconds: 30,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tamperbay",
    about = "Sends OPTIONS, HEAD, GET, POST, PUT, TRACE and CONNECT to a host to spot verb tampering issues."
)]
pub struct Config {
    /// The hostname or URL to perform verb tampering against (https:// is assumed)
    #[arg(short = 'u', long = "url", value_name = "HOST_OR_URL")]
    pub target: Option<String>,

    /// The max time to wait for each request before timing out (in seconds)
    #[arg(short = 't', long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pause between consecutive requests (in milliseconds)
    #[arg(long, default_value_t = DEFAULT_PACE_MS)]
    pub pace_ms: u64,

    /// Verify TLS certificates (verification is disabled by default)
    #[arg(long)]
    pub verify_tls: bool,

    /// Keep sending the remaining methods after a request fails
    #[arg(long)]
    pub keep_going: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            pace_ms: DEFAULT_PACE_MS,
            verify_tls: false,
            keep_going: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Per-request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Pause inserted between consecutive requests.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }

    /// `Continue` with `--keep-going`, `Abort` otherwise.
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        }
    }

    /// Checks the options that cannot be expressed as clap constraints and
    /// returns the normalized target.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the target is missing or invalid, or if the
    /// timeout is zero.
    pub fn validate(&self) -> Result<Target, ConfigError> {
        let raw = match self.target.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(ConfigError::MissingTarget),
        };
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        normalize_target(raw)
    }
}
