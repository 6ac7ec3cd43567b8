//! `usersearch submit` output and exit status

use std::path::Path;
use std::process::{Command, Output};

/// Run `usersearch` with a config that keeps the log file inside `dir`
fn run(dir: &Path, args: &[&str]) -> Output {
    let config_path = dir.join("usersearch.json");
    let config = serde_json::json!({ "log_file": dir.join("usersearch.log") });
    std::fs::write(&config_path, config.to_string()).unwrap();

    Command::new(env!("CARGO_BIN_EXE_usersearch"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .env_remove("CLICOLOR_FORCE")
        .env("CLICOLOR", "0")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn submit_prints_detail_url() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["submit", "lk"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("/user/lk?page=1&per_page=10"));
}

#[test]
fn submit_with_space_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["submit", "l k"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Username contains space."));
    assert!(!out.contains("/user/"));
}

#[test]
fn submit_empty_as_json_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["submit", "", "--output", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();

    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["input_error_message", "is_input_error", "route", "url", "username"]
    );

    assert_eq!(value["username"], "");
    assert_eq!(value["is_input_error"], true);
    assert_eq!(value["input_error_message"], "Username cannot be empty.");
    assert!(value["url"].is_null());
    assert_eq!(value["route"], "/");
}

#[test]
fn submit_valid_as_json_reports_route() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["submit", "lk", "--output", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["is_input_error"], false);
    assert_eq!(value["input_error_message"], "");
    assert_eq!(value["url"], "/user/lk?page=1&per_page=10");
    assert_eq!(value["route"], "/user/:username");
}
