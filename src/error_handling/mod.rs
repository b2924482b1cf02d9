//! Error handling.
//!
//! This module provides:
//! - Error type definitions for configuration, initialization and dispatch
//! - Categorization of dispatch failures
//! - Per-run failure tallies

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_dispatch_error, categorize_reqwest_error};
pub use stats::FailureStats;
pub use types::{ConfigError, DispatchError, ErrorType, InitializationError};
