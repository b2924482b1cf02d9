//! The HTTP methods a run sends.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::REQUEST_BODY;

/// One of the seven verbs sent to the target.
///
/// Declaration order is the order requests are sent in, so
/// `TamperMethod::iter()` walks the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TamperMethod {
    /// Discover advertised methods via the `Allow` header
    Options,
    /// Headers only
    Head,
    /// Baseline request
    Get,
    /// Carries the tampering payload
    Post,
    /// Carries the tampering payload
    Put,
    /// Reveals intermediaries via the `Via` header
    Trace,
    /// Checks for an open or authenticated proxy
    Connect,
}

impl TamperMethod {
    /// All methods in the order they are sent.
    pub fn schedule() -> impl Iterator<Item = TamperMethod> {
        TamperMethod::iter()
    }

    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TamperMethod::Options => "OPTIONS",
            TamperMethod::Head => "HEAD",
            TamperMethod::Get => "GET",
            TamperMethod::Post => "POST",
            TamperMethod::Put => "PUT",
            TamperMethod::Trace => "TRACE",
            TamperMethod::Connect => "CONNECT",
        }
    }

    /// Payload sent with this method, if any. Only POST and PUT carry one.
    pub fn body(&self) -> Option<&'static str> {
        match self {
            TamperMethod::Post | TamperMethod::Put => Some(REQUEST_BODY),
            _ => None,
        }
    }
}

impl fmt::Display for TamperMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TamperMethod> for reqwest::Method {
    fn from(method: TamperMethod) -> Self {
        match method {
            TamperMethod::Options => reqwest::Method::OPTIONS,
            TamperMethod::Head => reqwest::Method::HEAD,
            TamperMethod::Get => reqwest::Method::GET,
            TamperMethod::Post => reqwest::Method::POST,
            TamperMethod::Put => reqwest::Method::PUT,
            TamperMethod::Trace => reqwest::Method::TRACE,
            TamperMethod::Connect => reqwest::Method::CONNECT,
        }
    }
}
