use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a CLI invocation with credentials and hosts pointed at `server`.
pub fn cli_command(args: &[&str], server: &MockServer) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_doorbot"));
    cmd.args(args);
    cmd.env("RING_USERNAME", "alice@example.com");
    cmd.env("RING_PASSWORD", "secret");
    cmd.env("RING_API_BASE", server.uri());
    cmd.env("RING_OAUTH_BASE", server.uri());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the CLI against `server` and expect success.
pub async fn run_cli_success(args: &[&str], server: &MockServer) -> String {
    let output = cli_command(args, server)
        .output()
        .await
        .expect("Failed to execute CLI");
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI without any credentials in the environment.
pub fn run_cli_without_credentials(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doorbot"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env_remove("RING_USERNAME");
    cmd.env_remove("RING_PASSWORD");
    cmd.output().expect("Failed to execute CLI")
}

/// Mount token and session endpoints that always succeed.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-123",
            "expires_in": 3600,
            "refresh_token": "refresh-123",
            "scope": "client",
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/clients_api/session"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "profile": {
                "id": 42,
                "email": "alice@example.com",
                "first_name": "Alice",
                "last_name": "Liddell",
                "authentication_token": "auth-123"
            },
            "hardware_id": "hw",
            "user_flow": "ring"
        })))
        .mount(server)
        .await;
}
