//! `bodyguard scan` exit codes and report shape are a public contract.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn bodyguard() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bodyguard"))
}

fn report(stdout: &[u8]) -> Value {
    let line = String::from_utf8_lossy(stdout);
    serde_json::from_str(line.trim()).expect("scan must print one JSON line")
}

#[test]
fn scan_reject_exits_3() {
    let out = bodyguard()
        .arg("scan")
        .write_stdin(r#"{"hidden": {"is_malicious": true}}"#)
        .assert()
        .code(3)
        .get_output()
        .clone();
    let v = report(&out.stdout);
    assert_eq!(v["verdict"], "reject");
    assert_eq!(v["reason_code"], "R_MALICIOUS_FLAG");
    assert_eq!(v["status"], 403);
}

#[test]
fn scan_accept_exits_0() {
    bodyguard()
        .args(["scan", "-"])
        .write_stdin(r#"{"is_malicious": "1 == 1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\":\"accept\""))
        .stdout(predicate::str::contains("A_CLEAN"));
}

#[test]
fn scan_malformed_input_fails_open() {
    bodyguard()
        .arg("scan")
        .write_stdin("{\"is_malicious\": true")
        .assert()
        .success()
        .stdout(predicate::str::contains("A_UNDECODABLE"));
}

#[test]
fn scan_empty_input_fails_open() {
    bodyguard()
        .arg("scan")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("A_EMPTY_BODY"));
}

#[test]
fn scan_reads_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.json");
    std::fs::write(&path, r#"[{"x": 1}, {"is_malicious": true}]"#).unwrap();

    bodyguard().arg("scan").arg(&path).assert().code(3);
}

#[test]
fn scan_missing_file_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    bodyguard()
        .arg("scan")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn serve_rejects_bad_bind_flag() {
    bodyguard()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn serve_rejects_zero_body_limit() {
    bodyguard()
        .args(["serve", "--max-body-bytes", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--max-body-bytes"));
}
