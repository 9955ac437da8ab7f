//! Binary behavior: config loading, NDJSON filtering, summary output.

use std::io::Write;

use predicates::prelude::*;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const STREAM: &str = r#"{"status_code":"00000","acting_user":"batch_job","message":"checkpoint"}
{"status_code":"42P01","acting_user":"alice","message":"relation missing"}
{"status_code":"00000","acting_user":"carol","message":"connection received"}
"#;

#[test]
fn test_filters_matching_user_from_stream() {
    let config = write_temp(r#"user_name = "batch_job""#);
    let input = write_temp(STREAM);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("-C").arg(config.path()).arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("carol"))
        .stdout(predicate::str::contains("batch_job").not());
}

#[test]
fn test_set_override_wins_over_config_file() {
    let config = write_temp(r#"user_name = "batch_job""#);
    let input = write_temp(STREAM);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("-C")
        .arg(config.path())
        .arg("--set")
        .arg("user_name=alice")
        .arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("batch_job"))
        .stdout(predicate::str::contains("alice").not());
}

#[test]
fn test_annotate_keeps_suppressed_records_with_flag_cleared() {
    let input = write_temp(STREAM);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("--set")
        .arg("sqlcode=42P01")
        .arg("--annotate")
        .arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""deliver":false"#))
        .stdout(predicate::str::contains("42P01"));
}

#[test]
fn test_summary_reports_suppression_counts() {
    let input = write_temp(STREAM);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("--set")
        .arg("user_name=batch_job")
        .arg("--summary")
        .arg(input.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("records seen:      3"))
        .stderr(predicate::str::contains("records delivered: 2"))
        .stderr(predicate::str::contains("records suppressed: 1"));
}

#[test]
fn test_malformed_list_warns_and_delivers() {
    let input = write_temp(STREAM);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("--set").arg("user_name=alice,,bob").arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("batch_job"))
        .stderr(predicate::str::contains("must be a comma-separated list"));
}

#[test]
fn test_unknown_setting_is_rejected() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("--set").arg("usernames=alice");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn test_unparseable_line_passes_through() {
    let input = write_temp("not json at all\n");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg("--set").arg("user_name=alice").arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not json at all"));
}

#[test]
fn test_pre_suppressed_record_is_dropped_without_matching() {
    let input = write_temp(r#"{"status_code":"00000","deliver":false,"message":"upstream"}"#);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfilter");
    cmd.arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("upstream").not());
}
