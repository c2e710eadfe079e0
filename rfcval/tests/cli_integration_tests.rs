// rfcval/tests/cli_integration_tests.rs
//! End-to-end tests of the rfcval binary: exit codes, human output, JSON
//! export and the sample round trip.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Constructs a `Command` for the `rfcval` binary with a clean environment,
/// so an ambient `RUST_LOG` cannot change the output under test.
fn rfcval_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("rfcval"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A custom predicate to check if a string is valid JSON.
fn is_json() -> impl Predicate<str> {
    predicate::function(|s: &str| serde_json::from_str::<Value>(s).is_ok())
}

#[test]
fn check_valid_value_exits_zero() {
    rfcval_cmd()
        .args(["check", "GOPE650615ABC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("válido (persona física)"));
}

#[test]
fn check_invalid_value_exits_nonzero_with_messages() {
    rfcval_cmd()
        .args(["check", "AB12"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("inválido"))
        .stdout(predicate::str::contains("12 caracteres"));
}

#[test]
fn check_reads_stdin_when_no_arguments_given() {
    rfcval_cmd()
        .arg("check")
        .write_stdin("TUB650615ABC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("persona moral"));
}

#[test]
fn check_json_emits_structured_results() -> anyhow::Result<()> {
    let output = rfcval_cmd()
        .args(["check", "--json", "GOPE650615ABC", "CACA650615ABC"])
        .output()?;

    // Exit code reflects the invalid second value; the JSON is still whole.
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(is_json().eval(&stdout));

    let json: Value = serde_json::from_str(&stdout)?;
    assert_eq!(json[0]["is_valid"], true);
    assert_eq!(json[0]["tipo_persona"], "FISICA");
    assert_eq!(json[1]["is_valid"], false);
    assert_eq!(json[1]["errors"][0]["code"], "forbidden_word");
    Ok(())
}

#[test]
fn batch_json_stdout_reports_duplicates_and_counts() -> anyhow::Result<()> {
    let input = "GOPE650615ABC\ngope 650615 abc\nTUB650615ABC\nAB12\n";
    let output = rfcval_cmd()
        .args(["batch", "--json-stdout"])
        .write_stdin(input)
        .output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["total"], 4);
    assert_eq!(json["valid"], 3);
    assert_eq!(json["invalid"], 1);
    assert_eq!(json["duplicates"], 1);
    assert_eq!(json["rows"][1]["duplicate_of"], 1);
    Ok(())
}

#[test]
fn batch_fail_on_invalid_sets_exit_code() {
    rfcval_cmd()
        .args(["batch", "--fail-on-invalid"])
        .write_stdin("GOPE650615ABC\nAB12\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("FAIL"));
}

#[test]
fn batch_without_fail_flag_exits_zero_despite_invalid_rows() {
    rfcval_cmd()
        .arg("batch")
        .write_stdin("AB12\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("inválidos: 1"));
}

#[test_log::test]
fn batch_json_file_export() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let report_path = dir.path().join("report.json");

    rfcval_cmd()
        .args(["batch", "--json-file"])
        .arg(&report_path)
        .write_stdin("GOPE650615ABC\nTUB650615ABC\n")
        .assert()
        .success();

    let content = std::fs::read_to_string(&report_path)?;
    let json: Value = serde_json::from_str(&content)?;
    assert_eq!(json["total"], 2);
    assert_eq!(json["invalid"], 0);
    assert_eq!(json["input_hash"].as_str().map(str::len), Some(64));
    Ok(())
}

#[test]
fn sample_round_trips_through_check() -> anyhow::Result<()> {
    for tipo in ["fisica", "moral"] {
        let output = rfcval_cmd().args(["sample", "--tipo", tipo]).output()?;
        assert!(output.status.success());
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();

        rfcval_cmd().args(["check", &value]).assert().success();
    }
    Ok(())
}

#[test]
fn sample_count_emits_that_many_lines() {
    rfcval_cmd()
        .args(["sample", "--tipo", "moral", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::function(|s: &str| s.lines().count() == 3));
}
