//! Response reporter.
//!
//! Applies the method-specific checks to a [`ResponseSummary`] and emits the
//! log records for it. [`inspect`] computes findings without logging so the
//! checks can be exercised directly; [`report`] logs them followed by the
//! completion record.

use std::fmt;

use log::kv::{self, Key, Source, ToValue, VisitSource};
use log::{info, log, log_enabled, Level, Record};

use crate::config::{HEADER_ALLOW, HEADER_VIA, HTTP_STATUS_PROXY_AUTH_REQUIRED};
use crate::dispatch::ResponseSummary;
use crate::method::TamperMethod;

/// Result of a method-specific check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// OPTIONS advertised these methods (verbatim `Allow` value)
    AllowedMethods(String),
    /// OPTIONS answered without an `Allow` header
    OptionsNotImplemented,
    /// TRACE revealed this proxy chain (verbatim `Via` value)
    ProxiesIdentified(String),
    /// TRACE answered without a `Via` header
    NoProxyIdentified,
    /// CONNECT answered 407
    ProxyAuthRequired,
}

impl Finding {
    /// Severity the finding is logged at.
    pub fn level(&self) -> Level {
        match self {
            Finding::AllowedMethods(_) | Finding::ProxiesIdentified(_) => Level::Info,
            Finding::OptionsNotImplemented
            | Finding::NoProxyIdentified
            | Finding::ProxyAuthRequired => Level::Warn,
        }
    }

    /// Whether the finding flags a possible issue.
    pub fn is_warning(&self) -> bool {
        self.level() == Level::Warn
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::AllowedMethods(allowed) => write!(f, "Allowed methods: {allowed}"),
            Finding::OptionsNotImplemented => f.write_str(
                "The OPTIONS method does not appear to be properly implemented. No allowed methods were discovered.",
            ),
            Finding::ProxiesIdentified(via) => write!(f, "Proxy Servers identified: {via}"),
            Finding::NoProxyIdentified => f.write_str(
                "The TRACE method may not be implemented. No proxy servers were identified.",
            ),
            Finding::ProxyAuthRequired => f.write_str(
                "The CONNECT method is implemented, but proxy authentication is required.",
            ),
        }
    }
}

/// Field carrying the response status code
pub const FIELD_STATUS: &str = "Status";
/// Field carrying the body length in bytes
pub const FIELD_RESPONSE_LENGTH: &str = "Response Length";
/// Field carrying the number of distinct header names
pub const FIELD_UNIQUE_HEADERS: &str = "Unique Headers";

/// The completion record logged after every response.
///
/// The message is `<METHOD> request completed.`; the numbers travel as log
/// key-values (`Status`, `Response Length`, `Unique Headers`) so the JSON
/// format emits them as keys of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Method the response belongs to
    pub method: TamperMethod,
    /// Response status code
    pub status: u16,
    /// Body length in bytes
    pub response_length: usize,
    /// Number of distinct header names
    pub unique_headers: usize,
}

impl CompletionRecord {
    /// Takes the reported fields from `summary`.
    pub fn new(method: TamperMethod, summary: &ResponseSummary) -> Self {
        Self {
            method,
            status: summary.status,
            response_length: summary.body_length,
            unique_headers: summary.header_count,
        }
    }

    /// Emits the record at info level with its fields attached.
    pub fn log(&self) {
        if log_enabled!(Level::Info) {
            log::logger().log(
                &Record::builder()
                    .args(format_args!("{self}"))
                    .level(Level::Info)
                    .target(module_path!())
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .line(Some(line!()))
                    .key_values(self)
                    .build(),
            );
        }
    }
}

impl fmt::Display for CompletionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} request completed.", self.method)
    }
}

impl Source for CompletionRecord {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(FIELD_STATUS), self.status.to_value())?;
        visitor.visit_pair(
            Key::from_str(FIELD_RESPONSE_LENGTH),
            self.response_length.to_value(),
        )?;
        visitor.visit_pair(
            Key::from_str(FIELD_UNIQUE_HEADERS),
            self.unique_headers.to_value(),
        )
    }
}

/// Runs the check that applies to `method`, if any.
pub fn inspect(method: TamperMethod, summary: &ResponseSummary) -> Option<Finding> {
    match method {
        TamperMethod::Options => Some(match summary.header_value(HEADER_ALLOW) {
            Some(allowed) => Finding::AllowedMethods(allowed.into_owned()),
            None => Finding::OptionsNotImplemented,
        }),
        TamperMethod::Trace => Some(match summary.header_value(HEADER_VIA) {
            Some(via) => Finding::ProxiesIdentified(via.into_owned()),
            None => Finding::NoProxyIdentified,
        }),
        TamperMethod::Connect if summary.status == HTTP_STATUS_PROXY_AUTH_REQUIRED => {
            Some(Finding::ProxyAuthRequired)
        }
        _ => None,
    }
}

/// Logs the finding for `method` (if any) and then the completion record.
///
/// Returns the finding so the caller can include it in the run report.
pub fn report(method: TamperMethod, summary: &ResponseSummary) -> Option<Finding> {
    match method {
        TamperMethod::Options => info!("Checking for allowed methods..."),
        TamperMethod::Trace => info!("Checking for proxy servers..."),
        _ => {}
    }

    let finding = inspect(method, summary);
    if let Some(ref finding) = finding {
        log!(finding.level(), "{finding}");
    }

    CompletionRecord::new(method, summary).log();
    finding
}
