//! Exit codes of the `tamperbay` binary.

use std::process::{Command, Output};
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};

fn tamperbay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tamperbay"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn test_missing_target_exits_one() {
    let output = tamperbay(&["--pace-ms", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Must provide a hostname or IP (-u)"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_request_timeout_exits_one() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("OPTIONS", "/"))
            .times(..)
            .respond_with(delay_and_then(Duration::from_secs(3), status_code(200))),
    );
    let url = server.url("/").to_string();

    let output = tamperbay(&["-u", &url, "-t", "1", "--pace-ms", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPTIONS request timed out after 1s"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_completed_run_exits_zero() {
    let server = Server::run();
    for method in ["OPTIONS", "HEAD", "GET", "POST", "PUT", "TRACE"] {
        server.expect(
            Expectation::matching(request::method_path(method, "/"))
                .respond_with(status_code(200)),
        );
    }
    server.expect(
        Expectation::matching(request::method("CONNECT")).respond_with(status_code(405)),
    );
    let url = server.url("/").to_string();

    let output = tamperbay(&["-u", &url, "-t", "5", "--pace-ms", "0", "--log-format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let status_codes: Vec<u64> = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|line| line["Status"].as_u64())
        .collect();
    assert_eq!(status_codes, vec![200, 200, 200, 200, 200, 200, 405]);
}
