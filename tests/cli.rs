// Run the built binary and check its output and exit status.

mod common;

use std::process::{Command, Output};

use common::{write_file, OPCODES_JSON};

fn run(log: &str) -> Output {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "opcodes.json", OPCODES_JSON);
    write_file(dir.path(), "mine.txt", log);
    Command::new(env!("CARGO_BIN_EXE_cycles-test"))
        .current_dir(dir.path())
        .arg("--no-color")
        .output()
        .expect("failed to run cycles-test")
}

#[test]
fn test_pass() {
    let out = run("00 4\n20 8\n20 12\npre 00 8\n");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_fail() {
    let out = run("00 4\n20 8\n20 20\n");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Opcode 20 JR_NZ took 20 but expects {8, 12} (observed {8, 20})",
            "Test failed: 1/2",
        ]
    );
}

#[test]
fn test_unknown_opcode() {
    let out = run("FF 4\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown opcode FF"), "{stderr}");
}

#[test]
fn test_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_file(dir.path(), "table.json", OPCODES_JSON);
    let log = write_file(dir.path(), "run.log", "00 4\n");
    let status = Command::new(env!("CARGO_BIN_EXE_cycles-test"))
        .arg("--spec")
        .arg(&spec)
        .arg("--recording")
        .arg(&log)
        .status()
        .expect("failed to run cycles-test");
    assert!(status.success());
}

#[test]
fn test_missing_spec() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "mine.txt", "00 4\n");
    let out = Command::new(env!("CARGO_BIN_EXE_cycles-test"))
        .current_dir(dir.path())
        .output()
        .expect("failed to run cycles-test");
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("opcodes.json"), "{stderr}");
}
