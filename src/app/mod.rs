//! Main application modules.
//!
//! This module provides target normalization and run summary output used by
//! the orchestrator.

pub mod statistics;
pub mod url;

// Re-export public API
pub use statistics::log_run_summary;
pub use url::{normalize_target, Target};
