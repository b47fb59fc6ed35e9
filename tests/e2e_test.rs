/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/inventory.json";
const TODAY: &str = "2024-06-15";

mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("device-reports")
            .args(["-i", FIXTURE, "--today", TODAY])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("device-reports").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("device-reports")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("device-reports")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Sort column outside the allow-list
    #[test]
    fn test_exit_code_invalid_sort() {
        cargo_bin_cmd!("device-reports")
            .args(["-i", FIXTURE, "-s", "serial"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - inventory does not exist
    #[test]
    fn test_exit_code_missing_inventory() {
        cargo_bin_cmd!("device-reports")
            .args(["-i", "/nonexistent/inventory.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Device inventory not found"));
    }

    /// Unknown report keys are not errors
    #[test]
    fn test_exit_code_unknown_report() {
        cargo_bin_cmd!("device-reports")
            .args(["-i", FIXTURE, "--today", TODAY, "-r", "bogus"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Unknown report 'bogus'"))
            .stdout(predicate::str::contains(
                "# Device Report: no ping since 1 day",
            ));
    }
}

#[test]
fn test_list_reports() {
    let output = cargo_bin_cmd!("device-reports")
        .arg("--list-reports")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], "no_ping1\tNo ping since 1 day");
    assert_eq!(lines[16], "deprecation_devices90\tDeprecation devices in 90");
}

#[test]
fn test_markdown_report_to_stdout() {
    cargo_bin_cmd!("device-reports")
        .args(["-i", FIXTURE, "--today", TODAY, "-r", "deployment_open"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Device Report: deployment open",
        ))
        .stdout(predicate::str::contains("| Name | Venture | Remarks |"))
        .stdout(predicate::str::contains("| db-01 | shop |  |"))
        .stdout(predicate::str::contains("1 of 5 device(s) match this report."))
        .stderr(predicate::str::contains("Loaded 5 device(s)"));
}

#[test]
fn test_json_report_sorted_descending() {
    let output = cargo_bin_cmd!("device-reports")
        .args([
            "-i",
            FIXTURE,
            "--today",
            TODAY,
            "-r",
            "support_expires90",
            "-f",
            "json",
            "-s",
            "-support",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["devices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["cache-01", "web-01", "lab-01"]);
    assert_eq!(json["metadata"]["referenceDate"], TODAY);
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("report.md");

    cargo_bin_cmd!("device-reports")
        .args(["-i", FIXTURE, "--today", TODAY, "-r", "verified", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output complete"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("| web-01 | shop | primary frontend |"));
    assert!(content.contains("| lab-01 | research |  |"));
}

#[test]
fn test_yaml_inventory() {
    let dir = TempDir::new().unwrap();
    let inventory = dir.path().join("devices.yaml");
    fs::write(
        &inventory,
        r#"
devices:
  - id: 11
    name: printer-11
    verified: true
  - id: 12
    name: printer-12
"#,
    )
    .unwrap();

    cargo_bin_cmd!("device-reports")
        .args(["--today", TODAY, "-r", "verified", "-i"])
        .arg(&inventory)
        .assert()
        .success()
        .stdout(predicate::str::contains("| printer-11 |"))
        .stdout(predicate::str::contains("printer-12").not());
}
