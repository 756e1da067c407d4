use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const EXPORT: &str = "\
Patient name,NHS number,Date of birth,Preferred telephone number,First name,Email address
Ada Lovelace,1234567890,1980-01-01,O7123456789,Ada,a@b.com ext.123
Grace Hopper,bad,1981-02-02,07123456789,Grace,c@d.com
Alan Turing,1234567891,1982-03-03,,Alan,
";

const CLEANED: &str = "\
NHS number,Preferred telephone number,Date of birth,First name,Email address
1234567890,07123456789,1980-01-01,Ada,a@b.com
";

fn write_input(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("export.csv");
    fs::write(&path, contents).expect("write input");
    path
}

fn run_raw(temp: &TempDir, args: &[&str]) -> Output {
    cargo_bin_cmd!("acurex")
        .current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(temp: &TempDir, args: &[&str]) -> Output {
    let output = run_raw(temp, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    output
}

fn run_cmd_json(temp: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_cmd(temp, &full);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn clean_writes_default_file_and_warnings() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);

    let output = run_cmd(&temp, &["clean", path_arg(&input)]);

    let written =
        fs::read_to_string(temp.path().join("acurex_sms_cleaned.csv")).expect("cleaned file");
    assert_eq!(written, CLEANED);

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Cleaned 1 of 3 rows"));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains(
        "warning: 1 row(s) had their mobile number corrected to a valid UK format: rows 0"
    ));
    assert!(stderr.contains("warning: 1 row(s) dropped due to invalid NHS number"));
    assert!(stderr.contains(
        "warning: 1 row(s) dropped because both mobile number and email address were missing: rows 2"
    ));
}

#[test]
fn clean_json_reports_diagnostics_and_output() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);
    let out_dir = temp.path().join("out");

    let report = run_cmd_json(
        &temp,
        &[
            "clean",
            path_arg(&input),
            "--name",
            "  clinic_a ",
            "--out-dir",
            path_arg(&out_dir),
        ],
    );

    assert_eq!(report["original_rows"], 3);
    assert_eq!(report["final_rows"], 1);
    assert_eq!(report["dropped_rows"], 2);
    let diagnostics = report["diagnostics"].as_array().expect("array");
    let kinds: Vec<&str> = diagnostics
        .iter()
        .map(|d| d["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(
        kinds,
        vec![
            "mobile_corrected",
            "mobile_blanked",
            "email_blanked",
            "nhs_invalid",
            "both_missing"
        ]
    );
    assert_eq!(diagnostics[3]["rows"], serde_json::json!([1]));
    assert_eq!(diagnostics[3]["dropped"], true);

    let expected = out_dir.join("clinic_a.csv");
    assert_eq!(report["output"], path_arg(&expected));
    assert_eq!(fs::read_to_string(expected).expect("cleaned file"), CLEANED);
}

#[test]
fn clean_stdout_prints_csv() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);

    let output = run_cmd(&temp, &["clean", path_arg(&input), "--stdout"]);

    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), CLEANED);
    assert!(!temp.path().join("acurex_sms_cleaned.csv").exists());
}

#[test]
fn clean_uses_configured_output_name() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);
    let config = temp.path().join("acurex.toml");
    fs::write(&config, "output_name = \"from_config\"\n").expect("write config");

    run_cmd(
        &temp,
        &["--config", path_arg(&config), "clean", path_arg(&input)],
    );

    assert!(temp.path().join("from_config.csv").exists());
}

#[test]
fn clean_blank_name_falls_back_to_config() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);
    let config = temp.path().join("acurex.toml");
    fs::write(&config, "output_name = \"from_config\"\n").expect("write config");

    run_cmd(
        &temp,
        &[
            "--config",
            path_arg(&config),
            "clean",
            path_arg(&input),
            "--name",
            "  ",
        ],
    );

    assert!(temp.path().join("from_config.csv").exists());
    assert!(!temp.path().join("acurex_sms_cleaned.csv").exists());
}

#[test]
fn missing_columns_fail_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(
        &temp,
        "NHS number,Preferred telephone number,Date of birth\n1234567890,07123456789,1980-01-01\n",
    );

    let output = run_raw(&temp, &["clean", path_arg(&input)]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("missing columns: First name, Email address"));
    assert!(!temp.path().join("acurex_sms_cleaned.csv").exists());
}

#[test]
fn unreadable_input_fails_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, "a,b\n1,2,3\n");

    let output = run_raw(&temp, &["check", path_arg(&input)]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("could not read the CSV data"));
}

#[test]
fn check_previews_without_writing() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);

    let output = run_cmd(&temp, &["check", path_arg(&input)]);

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Uploaded rows: 3"));
    assert!(stdout.contains("- 1 row(s) had no valid email address and have been left blank: rows 2"));
    assert!(stdout.contains("Cleaned rows: 1"));
    assert!(stdout.contains("1234567890  07123456789"));
    assert!(!temp.path().join("acurex_sms_cleaned.csv").exists());
}

#[test]
fn check_show_input_previews_uploaded_table() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_input(&temp, EXPORT);

    let output = run_cmd(&temp, &["check", path_arg(&input), "--show-input"]);

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Patient name"));
    assert!(stdout.contains("Grace Hopper"));
    assert!(stdout.contains("O7123456789"));
    assert!(stdout.contains("Cleaned rows: 1"));

    let plain = run_cmd(&temp, &["check", path_arg(&input)]);
    let plain = String::from_utf8(plain.stdout).expect("utf8");
    assert!(!plain.contains("Patient name"));
}
