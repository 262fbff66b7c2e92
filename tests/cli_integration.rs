use assert_cmd::Command;
use predicates::prelude::*;

fn sysweep() -> Command {
    Command::cargo_bin("sysweep").unwrap()
}

#[test]
fn shows_help() {
    sysweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("disk and system inspection"));
}

#[test]
fn shows_version() {
    sysweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    sysweep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn list_subcommand_help() {
    sysweep()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("largest first"));
}

#[test]
fn clean_subcommand_help() {
    sysweep()
        .args(["clean", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removing cache files"));
}

#[test]
fn clean_help_documents_verbose_output() {
    sysweep()
        .args(["clean", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prints each removed file"));
}

#[test]
fn scan_subcommand_help() {
    sysweep()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("system information"));
}

#[test]
fn list_requires_dir_flag() {
    sysweep().arg("list").assert().failure();
}

#[test]
fn scan_rejects_unknown_resource() {
    sysweep().args(["scan", "network"]).assert().failure();
}

#[test]
fn invalid_config_path_fails() {
    sysweep()
        .args(["--config", "/nonexistent/path.toml", "scan", "process"])
        .assert()
        .failure();
}

#[test]
fn completions_generate() {
    sysweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sysweep"));
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
#[test]
fn scan_process_outputs_table() {
    sysweep()
        .args(["scan", "process"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PID"));
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
#[test]
fn scan_memory_json_is_an_array() {
    sysweep()
        .args(["scan", "memory", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}
