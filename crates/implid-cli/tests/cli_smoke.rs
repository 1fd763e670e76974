//! Runs the `implid` binary and checks exit status and output streams.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn implid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_implid"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn check_valid_record_exits_zero() {
    let output = implid(&["check", "--code", "IMPL_ID", "--passphrase", "P"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "<flags>#0: ok\n");
}

#[test]
fn check_reserved_character_exits_one() {
    let output = implid(&["check", "--code", "a|b", "--passphrase", "P"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("code: implementationId.invalidcharacter"));
}

#[test]
fn check_without_required_fields_exits_one() {
    let output = implid(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("code: implementationId.empty"));
    assert!(out.contains("passphrase: passphrase.empty"));
}

#[test]
fn validate_missing_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let missing = arg(&dir.path().join("missing.json"));
    let output = implid(&["validate", &missing]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn validate_malformed_record_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.json");
    std::fs::write(&path, r#"["a|b", null, "P"]"#).unwrap();
    let output = implid(&["validate", &arg(&path)]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("record #0"));
}

#[test]
fn validate_numeric_yaml_code_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.yaml");
    std::fs::write(&path, "code: 12345\npassphrase: P\n").unwrap();
    let output = implid(&["validate", &arg(&path)]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_format_keeps_logs_off_stdout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.yaml");
    std::fs::write(&path, "- code: IMPL_ID\n  passphrase: P\n- code: 'caret^caret'\n").unwrap();

    for extra in [&[][..], &["--log-json"][..]] {
        let mut args = vec!["--format", "json"];
        args.extend_from_slice(extra);
        let path_arg = arg(&path);
        args.extend(["validate", path_arg.as_str()]);

        let output = implid(&args);
        assert_eq!(output.status.code(), Some(1));

        let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let reports = reports.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["valid"], serde_json::json!(true));
        assert_eq!(
            reports[1]["errors"],
            serde_json::json!({
                "code": ["implementationId.invalidcharacter"],
                "passphrase": ["passphrase.empty"],
            })
        );
        assert!(!output.stderr.is_empty(), "debug logs expected on stderr");
    }
}
