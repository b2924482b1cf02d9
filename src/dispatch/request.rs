//! Request construction and dispatch.

use std::time::Duration;

use log::debug;

use super::response::ResponseSummary;
use crate::app::url::Target;
use crate::error_handling::DispatchError;
use crate::method::TamperMethod;

/// Everything needed to send one request of the schedule.
///
/// Built fresh for every method; nothing is carried over between requests.
#[derive(Debug, Clone)]
pub struct RequestSpec<'a> {
    /// Method to send
    pub method: TamperMethod,
    /// Host the request goes to
    pub target: &'a Target,
    /// Deadline covering the whole exchange, body read included
    pub timeout: Duration,
    /// Payload, present for POST and PUT only
    pub body: Option<&'static str>,
}

impl<'a> RequestSpec<'a> {
    /// Builds the request for `method`, attaching the payload to POST and PUT.
    pub fn for_method(method: TamperMethod, target: &'a Target, timeout: Duration) -> Self {
        Self {
            method,
            target,
            timeout,
            body: method.body(),
        }
    }
}

/// Sends one request and summarizes the response.
///
/// The User-Agent and certificate policy come from `client` (see
/// `initialization::init_client`). The deadline in `spec` is applied to
/// sending the request and reading the full body.
///
/// # Errors
///
/// Returns a `DispatchError` if the request cannot be built, the response is
/// not received, the body cannot be read, or the deadline elapses.
pub async fn dispatch(
    client: &reqwest::Client,
    spec: &RequestSpec<'_>,
) -> Result<ResponseSummary, DispatchError> {
    let method = spec.method;

    let mut builder = client.request(method.into(), spec.target.url().clone());
    if let Some(body) = spec.body {
        builder = builder.body(body);
    }
    let request = builder
        .build()
        .map_err(|source| DispatchError::Build { method, source })?;

    debug!("Sending {} {}", method, request.url());

    let exchange = async {
        let response = client
            .execute(request)
            .await
            .map_err(|source| DispatchError::Send { method, source })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|source| DispatchError::Body { method, source })?;

        Ok::<_, DispatchError>(ResponseSummary::new(status, body.len(), headers))
    };

    match tokio::time::timeout(spec.timeout, exchange).await {
        Ok(result) => result,
        Err(_) => Err(DispatchError::Timeout {
            method,
            timeout: spec.timeout,
        }),
    }
}
