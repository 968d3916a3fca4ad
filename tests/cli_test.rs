use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_swamd")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name))
        .unwrap()
}

#[test]
fn writes_markdown_for_annotated_files() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    std::fs::write(src.join("users.go"), fixture("users.go")).unwrap();
    std::fs::write(src.join("util.go"), fixture("util.go")).unwrap();
    let output = dir.path().join("api_spec.md");

    cmd()
        .arg("-p")
        .arg(&src)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("users.go - successfully processed."))
        .stderr(predicate::str::contains("util.go - successfully processed."));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        fixture("users.expected.md")
    );
}

#[test]
fn defaults_to_current_directory_and_api_spec_md() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("users.go"), fixture("users.go")).unwrap();

    cmd().current_dir(dir.path()).assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("api_spec.md")).unwrap(),
        fixture("users.expected.md")
    );
}

#[test]
fn skips_unparseable_files_and_keeps_going() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    std::fs::write(src.join("a_broken.go"), fixture("broken.go")).unwrap();
    std::fs::write(src.join("b_users.go"), fixture("users.go")).unwrap();
    let output = dir.path().join("out.md");

    cmd()
        .args(["--path", src.to_str().unwrap(), "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("a_broken.go - skipped"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        fixture("users.expected.md")
    );
}

#[test]
fn missing_path_still_exits_zero() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-p", dir.path().join("missing").to_str().unwrap()])
        .args(["-o", dir.path().join("out.md").to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn json_format_writes_one_line_per_operation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("accounts.go"), fixture("accounts.go")).unwrap();
    std::fs::write(dir.path().join("users.go"), fixture("users.go")).unwrap();
    let output = dir.path().join("out").join("api.jsonl");

    cmd()
        .args(["-p", dir.path().to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["-f", "json"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().all(|l| l.starts_with('{') && l.ends_with('}')));
}

#[test]
fn rejects_unknown_format() {
    cmd()
        .args(["-f", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
