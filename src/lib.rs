//! tamperbay library: HTTP verb tampering checks
//!
//! Sends OPTIONS, HEAD, GET, POST, PUT, TRACE and CONNECT to a single target,
//! one after another, and flags responses that hint at verb tampering or
//! proxy misconfiguration.
//!
//! **TLS certificate verification is disabled by default** so that targets
//! with self-signed or otherwise invalid certificates can be tested. Set
//! [`Config::verify_tls`] (`--verify-tls`) to turn it back on.
//!
//! # Example
//!
//! ```no_run
//! use tamperbay::{run_tamper, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     target: Some("example.com".to_string()),
//!     timeout_seconds: 30,
//!     ..Default::default()
//! };
//!
//! let report = run_tamper(config).await?;
//! println!("{} warnings raised", report.warnings());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dispatch;
pub mod error_handling;
pub mod initialization;
pub mod method;
pub mod report;

// Re-export public API
pub use app::{normalize_target, Target};
pub use config::{Config, FailurePolicy, LogFormat, LogLevel};
pub use dispatch::{dispatch, RequestSpec, ResponseSummary};
pub use error_handling::{ConfigError, DispatchError, ErrorType};
pub use method::TamperMethod;
pub use report::{CompletionRecord, Finding};
pub use run::{run_tamper, MethodOutcome, Outcome, TamperReport};

// Internal run module (contains the request schedule)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::{log_run_summary, Target};
    use crate::config::{Config, FailurePolicy};
    use crate::dispatch::{dispatch, RequestSpec, ResponseSummary};
    use crate::error_handling::{categorize_dispatch_error, ErrorType, FailureStats};
    use crate::initialization::init_client;
    use crate::method::TamperMethod;
    use crate::report::{report, Finding};

    /// What happened to one method of the schedule.
    #[derive(Debug)]
    pub enum Outcome {
        /// A response was received and inspected.
        Completed {
            /// Summary of the response
            summary: ResponseSummary,
            /// Result of the method-specific check, if one applies
            finding: Option<Finding>,
        },
        /// The request failed and the run continued (`--keep-going`).
        Failed {
            /// Failure category
            error_type: ErrorType,
            /// Full error chain
            message: String,
        },
    }

    /// Outcome of one method, in schedule order.
    #[derive(Debug)]
    pub struct MethodOutcome {
        /// The method sent
        pub method: TamperMethod,
        /// What came back
        pub outcome: Outcome,
    }

    /// Results of a verb tampering run.
    #[derive(Debug)]
    pub struct TamperReport {
        /// Normalized target the requests were sent to
        pub target: Target,
        /// One entry per method sent, in schedule order
        pub outcomes: Vec<MethodOutcome>,
        /// Failure counts per category (only non-zero with `--keep-going`)
        pub failures: FailureStats,
        /// Elapsed time in seconds, pacing included
        pub elapsed_seconds: f64,
    }

    impl TamperReport {
        /// Number of methods that received a response.
        pub fn completed(&self) -> usize {
            self.outcomes
                .iter()
                .filter(|o| matches!(o.outcome, Outcome::Completed { .. }))
                .count()
        }

        /// Number of methods whose request failed.
        pub fn failed(&self) -> usize {
            self.outcomes.len() - self.completed()
        }

        /// Number of warning-level findings.
        pub fn warnings(&self) -> usize {
            self.findings().filter(|f| f.is_warning()).count()
        }

        /// All findings, in schedule order.
        pub fn findings(&self) -> impl Iterator<Item = &Finding> {
            self.outcomes.iter().filter_map(|o| match &o.outcome {
                Outcome::Completed { finding, .. } => finding.as_ref(),
                Outcome::Failed { .. } => None,
            })
        }

        /// Outcome recorded for `method`, if it was sent.
        pub fn outcome(&self, method: TamperMethod) -> Option<&Outcome> {
            self.outcomes
                .iter()
                .find(|o| o.method == method)
                .map(|o| &o.outcome)
        }
    }

    /// Runs the verb tampering schedule against the configured target.
    ///
    /// Sends OPTIONS, HEAD, GET, POST, PUT, TRACE and CONNECT in that order,
    /// one at a time, pausing for the configured pacing between requests.
    /// Each response is handed to the reporter.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (`ConfigError`); nothing is sent
    /// - The HTTP client cannot be created
    /// - A request fails and the failure policy is `FailurePolicy::Abort`
    ///   (`DispatchError`); the remaining methods are not sent
    pub async fn run_tamper(config: Config) -> Result<TamperReport> {
        let target = config.validate()?;
        let timeout = config.timeout();
        let pacing = config.pacing();
        let policy = config.failure_policy();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        info!(
            "Starting verb tampering against {} (timeout {}s, pacing {}ms)",
            target,
            timeout.as_secs(),
            pacing.as_millis()
        );

        let start_time = Instant::now();
        let mut outcomes = Vec::new();
        let mut failures = FailureStats::new();

        for (index, method) in TamperMethod::schedule().enumerate() {
            if index > 0 && !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }

            info!("Making {method} request...");
            let spec = RequestSpec::for_method(method, &target, timeout);

            let outcome = match dispatch(&client, &spec).await {
                Ok(summary) => {
                    let finding = report(method, &summary);
                    Outcome::Completed { summary, finding }
                }
                Err(e) => {
                    let error_type = categorize_dispatch_error(&e);
                    let error = anyhow::Error::new(e);
                    match policy {
                        FailurePolicy::Abort => return Err(error),
                        FailurePolicy::Continue => {
                            warn!("{error:#}");
                            failures.increment_error(error_type);
                            Outcome::Failed {
                                error_type,
                                message: format!("{error:#}"),
                            }
                        }
                    }
                }
            };
            outcomes.push(MethodOutcome { method, outcome });
        }

        let report = TamperReport {
            target,
            outcomes,
            failures,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };
        log_run_summary(&report);

        Ok(report)
    }
}
