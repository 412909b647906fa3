// tests/eligibility_cli.rs
//! End-to-end runs of the binary against CSV fixtures.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn csv_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

fn absence_days() -> Command {
    let mut cmd = Command::cargo_bin("absence_days").expect("binary builds");
    // Keep the run hermetic regardless of the invoking shell's environment.
    cmd.env_remove("GOOGLE_SHEET_ID")
        .env_remove("GOOGLE_SHEET_TAB")
        .env_remove("GOOGLE_CREDENTIALS_JSON")
        .env_remove("GOOGLE_CREDENTIALS")
        .env_remove("DEFAULT_APPLICATION_DATE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn table_output_shows_trips_and_signals() {
    let file = csv_fixture(
        "start_date,end_date,note\n\
         2024-01-01,2024-01-10,winter\n\
         01/05/2023,21/05/2023,spring\n",
    );

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01/01/2024"))
        .stdout(predicate::str::contains("winter"))
        .stdout(predicate::str::contains(
            "8 days absent in the last 12 months (limit 90, since 15/06/2023)",
        ))
        .stdout(predicate::str::contains(
            "27 days absent in the last 5 years (limit 450, since 15/06/2019)",
        ))
        .stdout(predicate::str::contains("in the UK on 15/06/2019"));
}

#[test]
fn json_output_is_machine_readable() {
    let file = csv_fixture(
        "start_date,end_date,note\n\
         2024-01-01,2024-01-10,winter\n",
    );

    let output = absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--format", "json", "--no-cache"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let assessment: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(assessment["application_date"], "2024-06-15");
    assert_eq!(assessment["twelve_month_total"], 8);
    assert_eq!(assessment["five_year_total"], 8);
    assert_eq!(assessment["present_on_anchor_day"], true);
    assert_eq!(assessment["within_twelve_month_limit"], true);
    assert_eq!(assessment["trips"][0]["days_absent"], 8);
    assert_eq!(assessment["trips"][0]["note"], "winter");
}

#[test]
fn uk_form_application_date_is_accepted() {
    let file = csv_fixture("start_date,end_date,note\n2024-01-01,2024-01-10,x\n");

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "15/06/2024", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("application date 15/06/2024"));
}

#[test]
fn over_limit_absence_is_flagged() {
    // 92 whole days inside the trailing 12 months.
    let file = csv_fixture("start_date,end_date,note\n2023-07-01,2023-10-02,long\n");

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[✗] 92 days absent in the last 12 months",
        ))
        .stdout(predicate::str::contains(
            "[✓] 92 days absent in the last 5 years",
        ));
}

#[test]
fn unparseable_rows_are_dropped_not_fatal() {
    let file = csv_fixture(
        "start_date,end_date,note\n\
         2024-01-01,2024-01-10,kept\n\
         garbage,2024-02-01,dropped\n",
    );

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"))
        .stdout(predicate::str::contains("dropped").not());
}

#[test]
fn missing_required_column_is_a_hard_error() {
    let file = csv_fixture("start_date,note\n2024-01-01,x\n");

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--no-cache"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end_date"));
}

#[test]
fn missing_source_is_a_configuration_error() {
    absence_days()
        .args(["--date", "2024-06-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no trip source configured"));
}

#[test]
fn empty_trip_log_reports_presence_and_zero_totals() {
    let file = csv_fixture("start_date,end_date,note\n");

    absence_days()
        .args(["--csv", file.path().to_str().unwrap()])
        .args(["--date", "2024-06-15", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no trips on record)"))
        .stdout(predicate::str::contains(
            "[✓] 0 days absent in the last 12 months",
        ))
        .stdout(predicate::str::contains("[✓] in the UK on 15/06/2019"));
}
