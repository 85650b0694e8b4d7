//! Integration tests for the promptf CLI.
//!
//! These run the real binary but only through paths that never spawn a
//! shell: `--dry-run`, the usage-error path, and clap's own output. The
//! subprocess paths are covered by unit tests against a fake runner.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

/// PowerShell hosts always define this; cmd.exe never does.
const MARKER: &str = "PSModulePath";

fn promptf() -> Command {
    let mut cmd = Command::new(cargo_bin("promptf"));
    // Tests themselves may run under any host; start from a cmd-like env
    // with logging at its default level.
    cmd.env_remove(MARKER);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Customize your Windows shell prompt"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_prints_usage_and_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_empty_format_counts_as_missing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.arg("");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_dry_run_under_cmd_issues_prompt_builtin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.args(["--dry-run", "$P$G"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cmd /C prompt $P$G"));
    Ok(())
}

#[test]
fn cli_dry_run_reset_under_cmd_issues_bare_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.args(["--dry-run", "--reset"]);
    cmd.assert().success().stdout("cmd /C prompt\n");
    Ok(())
}

#[test]
fn cli_reset_takes_precedence_over_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.args(["--dry-run", "--reset", "$P$G"]);
    cmd.assert().success().stdout("cmd /C prompt\n");
    Ok(())
}

#[test]
fn cli_detects_powershell_from_marker() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.env(MARKER, r"C:\Program Files\PowerShell\Modules");
    cmd.args(["--dry-run", "PS> "]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("powershell -NoProfile -Command"))
        .stdout(predicate::str::contains("function global:prompt { 'PS> ' };"));
    Ok(())
}

#[test]
fn cli_empty_marker_still_means_powershell() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.env(MARKER, "");
    cmd.args(["--dry-run", "PS> "]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("powershell"));
    Ok(())
}

#[test]
fn cli_powershell_reset_removes_override_silently() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.env(MARKER, "");
    cmd.args(["--dry-run", "--reset"]);
    cmd.assert().success().stdout(predicate::str::contains(
        "Remove-Item function:\\prompt -ErrorAction SilentlyContinue;",
    ));
    Ok(())
}

#[test]
fn cli_shell_override_beats_detection() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.env(MARKER, "set-by-a-powershell-host");
    cmd.args(["--shell", "cmd", "--dry-run", "$D "]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cmd /C prompt"));
    Ok(())
}

#[test]
fn cli_format_with_spaces_survives_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.args(["--dry-run", "MyPrompt> "]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cmd /C prompt \"MyPrompt> \""));
    Ok(())
}

#[test]
fn cli_rejects_unknown_shell_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = promptf();
    cmd.args(["--shell", "fish", "x"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}
