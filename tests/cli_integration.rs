// Drives the built binary over stdin against a temporary data directory.
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_flatdb"))
}

fn write_schema(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("scheme.json");
    fs::write(
        &path,
        r#"{"name": "shop", "tuples_limit": 100, "structure": {"users": ["id", "name"]}}"#,
    )
    .expect("write schema");
    path
}

fn run_session(args: &[&str], dir: &Path, script: &str) -> Output {
    let mut child = cmd()
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    // The process may exit before reading everything (fatal startup errors)
    let _ = child.stdin.take().expect("stdin").write_all(script.as_bytes());
    child.wait_with_output().expect("wait")
}

#[test]
fn users_scenario() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_schema(temp.path());

    let out = run_session(&[], temp.path(), "INSERT users 1, Alice\nSELECT ALL users\nexit\n");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[1 Alice]"), "stdout: {stdout}");
    assert_eq!(
        fs::read_to_string(temp.path().join("users.csv")).expect("read"),
        "1,Alice\n"
    );

    let out = run_session(
        &[],
        temp.path(),
        "DELETE FROM users WHERE Alice\nSELECT ALL users\nEXIT\n",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 record deleted"), "stdout: {stdout}");
    assert!(!stdout.contains("[1 Alice]"));
    assert_eq!(
        fs::read_to_string(temp.path().join("users.csv")).expect("read"),
        ""
    );
}

#[test]
fn data_dir_and_schema_flags() {
    let temp = tempfile::tempdir().expect("tempdir");
    let schema = write_schema(temp.path());
    let data = temp.path().join("data");

    let out = run_session(
        &[
            "--schema",
            schema.to_str().unwrap(),
            "--data-dir",
            data.to_str().unwrap(),
        ],
        temp.path(),
        "INSERT users 7, Grace\nSELECT users WHERE Gra\n",
    );
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("[7 Grace]"));
    assert!(data.join("users.csv").exists());
    assert!(!temp.path().join("users.csv").exists());
}

#[test]
fn legacy_syntax_flag() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_schema(temp.path());

    let out = run_session(
        &["--legacy-syntax"],
        temp.path(),
        "INSERT users 1, Alice\nINSERT users 1, Alice, admin\nSELECT users x admin\nexit\n",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("usage: INSERT"), "stdout: {stdout}");
    assert!(stdout.contains("[1 Alice admin]"), "stdout: {stdout}");
}

#[test]
fn missing_schema_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = run_session(&[], temp.path(), "SELECT ALL users\n");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("config error"));
    assert!(out.stdout.is_empty());
}
