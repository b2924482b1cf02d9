//! Request dispatcher.
//!
//! Builds and sends a single request of the schedule and reduces the response
//! to a [`ResponseSummary`]. Errors are returned to the caller, never handled
//! here.

mod request;
mod response;

// Re-export public API
pub use request::{dispatch, RequestSpec};
pub use response::ResponseSummary;
