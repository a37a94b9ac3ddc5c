//! CLI tests against a mock Ring API.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{cli_command, mount_auth, run_cli_success, run_cli_without_credentials};

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_without_credentials(&["--help"], home.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["profile", "devices", "history", "recording", "listen"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_missing_credentials_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_without_credentials(&["profile"], home.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing --username"));
}

#[tokio::test]
async fn test_profile() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    let stdout = run_cli_success(&["profile"], &server).await;
    assert!(stdout.contains("Alice Liddell"));
    assert!(stdout.contains("alice@example.com"));
}

#[tokio::test]
async fn test_devices() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/clients_api/ring_devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "doorbots": [{"id": 1, "description": "Front Door", "address": "1 Main St"}]
        })))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["devices"], &server).await;
    assert!(stdout.contains("Front Door"));
    assert!(stdout.contains("1 Main St"));
}

#[tokio::test]
async fn test_history_saves_recordings() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/clients_api/doorbots/history"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "created_at": "2017-03-14T21:13:47.000Z", "kind": "ding", "answered": true,
             "doorbot": {"id": 1, "description": "Front Door"}},
            {"id": 10, "created_at": "2017-03-14T20:00:00.000Z", "kind": "motion",
             "doorbot": {"id": 1, "description": "Front Door"}}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/clients_api/dings/11/recording"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 1024]))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let stdout = run_cli_success(
        &[
            "history",
            "--limit",
            "3",
            "--save-recordings",
            "1",
            "--output-dir",
            output_dir,
        ],
        &server,
    )
    .await;

    assert!(stdout.contains("2017-03-14T21:13:47.000Z: Front Door ding true"));
    assert!(stdout.contains("2017-03-14T20:00:00.000Z: Front Door motion false"));

    let saved = dir.path().join("saved-recording-11.mp4");
    assert_eq!(std::fs::metadata(&saved).unwrap().len(), 1024);
    assert!(!dir.path().join("saved-recording-10.mp4").exists());
}

#[tokio::test]
async fn test_listen_stops_after_count() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/clients_api/dings/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "doorbot_description": "Front Door", "sip_server_ip": "192.0.2.10", "kind": "ding"},
            {"id": 2, "doorbot_description": "Back Door", "sip_server_ip": "192.0.2.11", "kind": "motion"}
        ])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &["listen", "--interval", "0", "--count", "2", "--json"],
        &server,
    )
    .await;

    let ids: Vec<u64> = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_listen_reports_rate_limit() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/clients_api/dings/active"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let output = cli_command(&["listen", "--interval", "0"], &server)
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api rate limit exceeded"));
}
