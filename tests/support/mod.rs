use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for quill
pub fn quill() -> Command {
    cargo_bin_cmd!("quill")
}

/// Extract the ID printed on the first line of a create command
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Setup a test site and return the directory
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    quill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Create a published post and return its ID
#[allow(dead_code)]
pub fn publish_post(
    dir: &TempDir,
    title: &str,
    body: &str,
    tags: &[&str],
    publish: &str,
) -> String {
    let mut cmd = quill();
    cmd.current_dir(dir.path()).args([
        "post",
        "new",
        title,
        "--author",
        "admin",
        "--body",
        body,
        "--publish",
        publish,
        "--published",
    ]);
    for tag in tags {
        cmd.args(["--tag", tag]);
    }
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "post new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    extract_id(&output)
}

/// Create a draft post and return its ID
#[allow(dead_code)]
pub fn draft_post(dir: &TempDir, title: &str, tags: &[&str]) -> String {
    let mut cmd = quill();
    cmd.current_dir(dir.path())
        .args(["post", "new", title, "--author", "admin"]);
    for tag in tags {
        cmd.args(["--tag", tag]);
    }
    extract_id(&cmd.output().unwrap())
}

/// Parse JSON stdout
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
