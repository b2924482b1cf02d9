//! Response summaries.

use std::borrow::Cow;

use reqwest::header::HeaderMap;

/// What the reporter needs to know about a completed response.
#[derive(Debug, Clone)]
pub struct ResponseSummary {
    /// Response status code
    pub status: u16,
    /// Length of the response body in bytes
    pub body_length: usize,
    /// Number of distinct header names
    pub header_count: usize,
    /// All response headers as received
    pub headers: HeaderMap,
}

impl ResponseSummary {
    /// Builds a summary; the header count is derived from `headers`.
    pub fn new(status: u16, body_length: usize, headers: HeaderMap) -> Self {
        Self {
            status,
            body_length,
            header_count: headers.keys_len(),
            headers,
        }
    }

    /// First value of header `name`, or `None` if it is absent or blank.
    ///
    /// Bytes outside ASCII (obs-text) are kept: the value is decoded as UTF-8
    /// with invalid sequences replaced, so a present header is never lost.
    pub fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, ALLOW, SET_COOKIE, VIA};

    #[test]
    fn test_header_count_counts_distinct_names() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        headers.insert(VIA, HeaderValue::from_static("1.1 proxy1"));

        let summary = ResponseSummary::new(200, 5, headers);
        assert_eq!(summary.header_count, 2);
        assert_eq!(summary.body_length, 5);
    }

    #[test]
    fn test_header_value_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(ALLOW, HeaderValue::from_static("GET, POST"));
        let summary = ResponseSummary::new(200, 0, headers);

        assert_eq!(summary.header_value("Allow").as_deref(), Some("GET, POST"));
        assert_eq!(summary.header_value("allow").as_deref(), Some("GET, POST"));
        assert_eq!(summary.header_value("Via"), None);
    }

    #[test]
    fn test_empty_header_value_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(ALLOW, HeaderValue::from_static(""));
        let summary = ResponseSummary::new(200, 0, headers);

        assert_eq!(summary.header_value("Allow"), None);
        assert_eq!(summary.header_count, 1);
    }

    #[test]
    fn test_non_ascii_header_value_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(
            VIA,
            HeaderValue::from_bytes(b"proxy\xe9").expect("obs-text is allowed"),
        );
        let summary = ResponseSummary::new(200, 0, headers);

        assert_eq!(summary.header_value("Via").as_deref(), Some("proxy\u{FFFD}"));
    }
}
