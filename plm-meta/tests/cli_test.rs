use assert_cmd::Command;
use predicates::prelude::*;
use registry_proto::{StubRegistry, stub};
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

const FIXTURES: &str = include_str!("../../registry-proto/fixtures/registry.json");

/// Serves the bundled fixtures on an ephemeral port for as long as `runtime` lives.
fn spawn_stub_registry(runtime: &Runtime) -> u16 {
    runtime.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let registry = StubRegistry::from_json(FIXTURES).unwrap();

        tokio::spawn(stub::serve(listener, registry));
        port
    })
}

fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn plm_meta() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plm-meta"))
}

#[test]
fn test_prints_metadata_as_json() {
    let runtime = Runtime::new().unwrap();
    let port = spawn_stub_registry(&runtime);

    plm_meta()
        .args(["@cncf/udpa", "--host", "127.0.0.1", "--port", &port.to_string(), "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "@cncf/udpa""#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_reads_endpoint_from_options_file() {
    let runtime = Runtime::new().unwrap();
    let port = spawn_stub_registry(&runtime);

    let mut options = NamedTempFile::new().unwrap();
    write!(options, r#"{{"host": "127.0.0.1", "port": {port}}}"#).unwrap();

    plm_meta()
        .arg("@googleapis/googleapis")
        .arg("--config")
        .arg(options.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "@googleapis/googleapis""#));
}

#[test]
fn test_unknown_library_reports_registry_error() {
    let runtime = Runtime::new().unwrap();
    let port = spawn_stub_registry(&runtime);

    plm_meta()
        .args(["@nobody/nothing", "--host", "127.0.0.1", "--port", &port.to_string(), "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Registry Error:"));
}

#[test]
fn test_unreachable_registry_exits_with_connection_failure() {
    let port = unused_port();

    plm_meta()
        .args(["@cncf/udpa", "--host", "127.0.0.1", "--port", &port.to_string(), "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Connection Failed:"));
}

#[test]
fn test_missing_port_exits_with_configuration_error() {
    plm_meta()
        .args(["@cncf/udpa", "--host", "127.0.0.1", "-v"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Configuration:"));
}
