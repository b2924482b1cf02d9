//! End-to-end tests of the request schedule against a local stub server.

mod helpers;

use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};

use helpers::stub_config;
use tamperbay::{
    run_tamper, Config, ConfigError, DispatchError, ErrorType, Finding, Outcome, TamperMethod,
};

/// Expects exactly one request per method, answered with `status`.
///
/// CONNECT gets 405: a 2xx would turn the connection into a tunnel.
fn expect_all(server: &Server, status: u16) {
    for method in ["OPTIONS", "HEAD", "GET", "POST", "PUT", "TRACE"] {
        server.expect(
            Expectation::matching(request::method_path(method, "/"))
                .respond_with(status_code(status)),
        );
    }
    server.expect(
        Expectation::matching(request::method("CONNECT")).respond_with(status_code(405)),
    );
}

#[tokio::test]
async fn test_missing_target_fails_before_any_request() {
    let error = run_tamper(Config::default())
        .await
        .expect_err("a target is required");
    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingTarget)
    ));
}

#[tokio::test]
async fn test_invalid_target_is_config_error() {
    let config = Config {
        target: Some("not a host!!".to_string()),
        pace_ms: 0,
        ..Default::default()
    };
    let error = run_tamper(config).await.expect_err("target is invalid");
    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidTarget { .. })
    ));
}

#[tokio::test]
async fn test_full_schedule_runs_in_order() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("OPTIONS", "/"))
            .respond_with(status_code(200).append_header("Allow", "GET, POST")),
    );
    for method in ["HEAD", "GET", "POST", "PUT"] {
        server.expect(
            Expectation::matching(request::method_path(method, "/"))
                .respond_with(status_code(200).body("ok")),
        );
    }
    server.expect(
        Expectation::matching(request::method_path("TRACE", "/"))
            .respond_with(status_code(200).append_header("Via", "proxy1")),
    );
    server.expect(
        Expectation::matching(request::method("CONNECT")).respond_with(status_code(407)),
    );

    let report = run_tamper(stub_config(&server, 5))
        .await
        .expect("run should complete");

    let order: Vec<TamperMethod> = report.outcomes.iter().map(|o| o.method).collect();
    assert_eq!(order, TamperMethod::schedule().collect::<Vec<_>>());
    assert_eq!(report.completed(), 7);
    assert_eq!(report.failed(), 0);

    let findings: Vec<&Finding> = report.findings().collect();
    assert_eq!(
        findings,
        vec![
            &Finding::AllowedMethods("GET, POST".to_string()),
            &Finding::ProxiesIdentified("proxy1".to_string()),
            &Finding::ProxyAuthRequired,
        ]
    );
    assert_eq!(report.warnings(), 1);

    match report.outcome(TamperMethod::Get) {
        Some(Outcome::Completed { summary, finding }) => {
            assert_eq!(summary.status, 200);
            assert_eq!(summary.body_length, 2);
            assert!(finding.is_none());
        }
        other => panic!("GET should have completed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_headers_raise_warnings() {
    let server = Server::run();
    expect_all(&server, 200);

    let report = run_tamper(stub_config(&server, 5))
        .await
        .expect("run should complete");

    let findings: Vec<&Finding> = report.findings().collect();
    assert_eq!(
        findings,
        vec![&Finding::OptionsNotImplemented, &Finding::NoProxyIdentified]
    );
    assert_eq!(report.warnings(), 2);
}

#[tokio::test]
async fn test_timeout_aborts_remaining_methods() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("OPTIONS", "/"))
            .respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/"))
            .respond_with(delay_and_then(Duration::from_secs(3), status_code(200))),
    );
    // No expectation for GET onwards: the server fails the test if they arrive

    let error = run_tamper(stub_config(&server, 1))
        .await
        .expect_err("HEAD should time out");

    assert!(matches!(
        error.downcast_ref::<DispatchError>(),
        Some(DispatchError::Timeout {
            method: TamperMethod::Head,
            ..
        })
    ));
}

#[tokio::test]
async fn test_keep_going_records_failure_and_continues() {
    let server = Server::run();
    for method in ["OPTIONS", "HEAD", "POST", "PUT", "TRACE"] {
        server.expect(
            Expectation::matching(request::method_path(method, "/"))
                .respond_with(status_code(200)),
        );
    }
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(delay_and_then(Duration::from_secs(3), status_code(200))),
    );
    server.expect(
        Expectation::matching(request::method("CONNECT")).respond_with(status_code(405)),
    );

    let config = Config {
        keep_going: true,
        ..stub_config(&server, 1)
    };
    let report = run_tamper(config).await.expect("run should finish");

    assert_eq!(report.outcomes.len(), 7);
    assert_eq!(report.completed(), 6);
    assert_eq!(report.failed(), 1);
    assert!(matches!(
        report.outcome(TamperMethod::Get),
        Some(Outcome::Failed {
            error_type: ErrorType::HttpRequestTimeoutError,
            ..
        })
    ));
    assert_eq!(
        report
            .failures
            .get_error_count(ErrorType::HttpRequestTimeoutError),
        1
    );
}

#[tokio::test]
async fn test_pacing_is_applied_between_requests() {
    let server = Server::run();
    expect_all(&server, 204);

    let config = Config {
        pace_ms: 50,
        ..stub_config(&server, 5)
    };
    let started = std::time::Instant::now();
    let report = run_tamper(config).await.expect("run should complete");

    // Six pauses between seven requests
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert_eq!(report.completed(), 7);
}
