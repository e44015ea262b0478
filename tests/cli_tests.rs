//! CLI interface tests
//!
//! Runs the broker-roi binary in throwaway working directories and checks
//! console output, JSON output, CSV export and exit codes.

use predicates::prelude::*;
use std::fs;

mod common;
use common::assertions::{assert_approx_eq, assert_money_eq};
use common::{bin, fixtures, stdout_json};

#[test]
fn test_cli_help_flag_displays_usage_information() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("IT broker vs in-house procurement"))
        .stdout(predicate::str::contains("sensitivity"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("broker-roi"));
}

#[test]
fn test_compare_reference_scenario_table() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "compare"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("In-House vs. IT Broker"))
        .stdout(predicate::str::contains("$200,000"))
        .stdout(predicate::str::contains("3.00x"))
        .stdout(predicate::str::contains("3-Year Cumulative Benefit"));
}

#[test]
fn test_compare_json_is_parseable_and_complete() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    let output = bin()
        .args(["compare", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["command"], "compare");
    assert_eq!(json["domain"], "All");
    assert_money_eq(json["result"]["broker"]["net_savings"].as_f64().unwrap(), 200_000.0);
    assert_approx_eq(json["result"]["broker"]["total_roi"].as_f64().unwrap(), 3.0, 1e-9);
    assert!(json["result"]["in_house"]["total_roi"].is_null());
    assert_eq!(json["result"]["projection"].as_array().unwrap().len(), 3);
}

#[test]
fn test_compare_reads_config_from_working_directory() {
    let temp_dir = fixtures::telecom_project().expect("Failed to create fixture");

    let output = bin()
        .args(["compare", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["domain"], "Telecom");
    let broker = &json["result"]["broker"];
    assert_money_eq(broker["gross_savings"].as_f64().unwrap(), 175_000.0);
    assert_money_eq(broker["fee_cost"].as_f64().unwrap(), 40_000.0);
    assert_money_eq(broker["net_savings"].as_f64().unwrap(), 135_000.0);
    assert_eq!(json["result"]["projection"].as_array().unwrap().len(), 5);
}

#[test]
fn test_flags_override_config_file() {
    let temp_dir = fixtures::telecom_project().expect("Failed to create fixture");

    let output = bin()
        .args(["compare", "--json", "--fee", "0", "--years", "2"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json["result"]["broker"]["total_roi"].is_null());
    assert_eq!(json["result"]["projection"].as_array().unwrap().len(), 2);
}

#[test]
fn test_explicit_config_path() {
    let (_temp_dir, path) = fixtures::standalone_config("domain = \"governance\"\n")
        .expect("Failed to create fixture");
    let cwd = fixtures::empty_project().expect("Failed to create temp directory");

    let output = bin()
        .args(["compare", "--json", "--config"])
        .arg(&path)
        .current_dir(cwd.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["domain"], "Governance");
}

#[test]
fn test_compare_csv_export() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");
    let csv_path = temp_dir.path().join("out").join("compare.csv");

    bin()
        .args(["--no-emoji", "compare", "--csv"])
        .arg(&csv_path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV written to"));

    let csv = fs::read_to_string(&csv_path).expect("CSV was not written");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Metric,In-House,IT Broker"));
    assert!(csv.contains("Net Savings ($)"));
    assert!(csv.contains("Total ROI (x)"));
}

#[test]
fn test_project_json_payback_and_roi() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    let output = bin()
        .args(["project", "--json", "--discount-rate", "0"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    let metrics = &json["result"]["metrics"];
    assert_money_eq(metrics["npv"].as_f64().unwrap(), 900_000.0);
    assert_approx_eq(metrics["roi_pct"].as_f64().unwrap(), 800.0, 1e-6);
    assert_eq!(metrics["payback"]["year"], 1);
    assert_eq!(json["result"]["cumulative"].as_array().unwrap().len(), 3);
}

#[test]
fn test_project_table() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "project", "-y", "4"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Discounted Projection"))
        .stdout(predicate::str::contains("4 years at 8.0%"))
        .stdout(predicate::str::contains("1 year"));
}

#[test]
fn test_category_cloud_services() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    let output = bin()
        .args(["category", "Cloud Services", "--spend", "100000", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    let benefit = &json["result"]["benefit"];
    assert_eq!(benefit["category"], "Cloud Services");
    assert_money_eq(benefit["license_savings"].as_f64().unwrap(), 40_000.0);
    assert_money_eq(benefit["implementation_savings"].as_f64().unwrap(), 20_000.0);
    assert_money_eq(benefit["annual_benefit"].as_f64().unwrap(), 660_000.0);
    assert!(json["result"]["npv_advantage"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_category_list() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "category", "--list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud Services"))
        .stdout(predicate::str::contains("40%"));
}

#[test]
fn test_unknown_category_fails_with_data_error() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["category", "Quantum Computing"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_sensitivity_default_grid_json() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    let output = bin()
        .args(["sensitivity", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["result"]["savings"].as_array().unwrap().len(), 9);
    assert_eq!(json["result"]["fee"].as_array().unwrap().len(), 3);
    let points = json["result"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 27);
    assert_eq!(points[0]["savings_pct"], 10.0);
    assert_eq!(points[0]["fee_pct"], 8.0);
}

#[test]
fn test_sensitivity_around_matrix() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "sensitivity", "--around"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total ROI Sensitivity"))
        .stdout(predicate::str::contains("3.00x"))
        .stdout(predicate::str::contains("of 15 points break even"));
}

#[test]
fn test_sensitivity_custom_range_csv() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");
    let csv_path = temp_dir.path().join("grid.csv");

    bin()
        .args([
            "sensitivity",
            "--savings-range",
            "20,30",
            "--fee-range",
            "10,10",
            "--json",
            "--csv",
        ])
        .arg(&csv_path)
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("CSV was not written");
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "init", "--domain", "telecom"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Telecom"))
        .stdout(predicate::str::contains("Created .broker-roi.toml"));

    let config = fs::read_to_string(temp_dir.path().join(fixtures::CONFIG_FILE))
        .expect("Config was not written");
    assert!(config.contains("domain = \"Telecom\""));
    assert!(config.contains("savings-pct = 35"));

    bin()
        .args(["--no-emoji", "init", "--domain", "security"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    let unchanged = fs::read_to_string(temp_dir.path().join(fixtures::CONFIG_FILE)).unwrap();
    assert_eq!(config, unchanged);
}

#[test]
fn test_init_list_shows_presets() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["--no-emoji", "init", "--list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mobility & IoT"))
        .stdout(predicate::str::contains("Governance"));
    assert!(!temp_dir.path().join(fixtures::CONFIG_FILE).exists());
}

#[test]
fn test_unknown_domain_exit_code_and_help() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["compare", "--domain", "Mainframes"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Invalid domain"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_invalid_config_exit_code() {
    let temp_dir = fixtures::invalid_project().expect("Failed to create fixture");

    bin()
        .arg("compare")
        .current_dir(temp_dir.path())
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_missing_explicit_config_exit_code() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["compare", "--config", "nope.toml"])
        .current_dir(temp_dir.path())
        .assert()
        .code(66)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_out_of_range_flag_is_rejected() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["compare", "--savings", "150"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("0-100%"));
}

#[test]
fn test_tiny_sensitivity_step_is_rejected() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["sensitivity", "--step", "0.0000001"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("grid would have"))
        .stderr(predicate::str::contains("larger --step"));
}

#[test]
fn test_huge_forecast_horizon_is_rejected() {
    let temp_dir = fixtures::empty_project().expect("Failed to create temp directory");

    bin()
        .args(["project", "--years", "4000000000"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("between 1 and 100 years"));
}

#[test]
fn test_completions_bash() {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("broker-roi"));
}
