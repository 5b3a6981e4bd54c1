//! CLI smoke tests for the perks-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and a short live run.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Helper to run the perks-server binary with given arguments
fn run_perks_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_perks-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute perks-server")
}

/// Minimal config rooted in `home`, with file logging off.
fn write_config(home: &Path, extra: &str) -> std::path::PathBuf {
    let config_path = home.join("config.yaml");
    let content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 8087

logging:
  default:
    console_level: "off"
    file: ""
{extra}
"#,
        home.display().to_string().replace('\\', "/")
    );
    std::fs::write(&config_path, content).expect("Failed to write config file");
    config_path
}

#[test]
fn test_cli_help_command() {
    let output = run_perks_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("perks-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_perks_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("perks-server"), "Should contain binary name");
    assert!(stdout.contains("0.1.0"), "Should contain version");
}

#[test]
fn test_cli_invalid_command() {
    let output = run_perks_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_perks_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file not found"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let output = run_perks_server(&["-c", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail with missing config file"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_perks_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to extract config"),
        "Should mention config parsing issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "sqlite://database/perks.db"
  max_conns: 5
"#,
    );

    let output = run_perks_server(&["--config", config_path.to_str().unwrap(), "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("127.0.0.1:8087"));
}

#[test]
fn test_cli_unsupported_database_fails_check() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "mysql://localhost/perks"
"#,
    );

    let output = run_perks_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported database type"), "{}", stderr);
}

#[test]
fn test_cli_mock_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "mysql://localhost/nonexistent"
"#,
    );

    // --mock replaces the configured database, so check passes
    let output =
        run_perks_server(&["--config", config_path.to_str().unwrap(), "--mock", "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with mock database");
}

#[test]
fn test_cli_invalid_bind_address() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
modules:
  api_ingress:
    bind_addr: "not-an-address"
"#,
    );

    let output = run_perks_server(&["--config", config_path.to_str().unwrap(), "--mock", "run"]);

    assert!(!output.status.success(), "Should fail with invalid bind address");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid bind address"), "{}", stderr);
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "");

    let output = run_perks_server(&[
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "9123",
        "--print-config",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9123"), "{}", stdout);
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_perks_server(&["run", "--help"]);
    assert!(output.status.success(), "Run subcommand help should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Start the server"));

    let output = run_perks_server(&["check", "--help"]);
    assert!(output.status.success(), "Check subcommand help should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Check configuration"));
}

async fn http_request(port: u16, raw: &str) -> std::io::Result<String> {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await?;
    stream.write_all(raw.as_bytes()).await?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[tokio::test]
async fn test_cli_run_serves_perks_with_mock_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "");

    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_perks-server"))
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--mock",
            "--port",
            &port.to_string(),
            "run",
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn perks-server");

    let get_healthz = "GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";
    let mut health = None;
    for _ in 0..100 {
        if let Ok(resp) = http_request(port, get_healthz).await {
            health = Some(resp);
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    let health = health.expect("server did not come up");
    assert!(health.starts_with("HTTP/1.1 200"), "{}", health);
    assert!(health.ends_with("ok"), "{}", health);

    let body = r#"{"title":"Pizza Deal","category":"food","discountPercent":20}"#;
    let create = format!(
        "POST /perks HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let resp = http_request(port, &create).await.unwrap();
    assert!(resp.starts_with("HTTP/1.1 201"), "{}", resp);
    assert!(resp.to_ascii_lowercase().contains("x-request-id"), "{}", resp);
    assert!(resp.contains("\"title\":\"Pizza Deal\""), "{}", resp);

    let resp = http_request(
        port,
        "GET /nowhere HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await
    .unwrap();
    assert!(resp.starts_with("HTTP/1.1 404"), "{}", resp);
    assert!(resp.contains("route not found"), "{}", resp);

    child.kill().await.ok();
}
