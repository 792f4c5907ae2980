use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("periodviz").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("periodviz"));
}

#[test]
fn segments_prints_one_line_per_year() {
    let mut cmd = Command::cargo_bin("periodviz").unwrap();
    cmd.args(["segments", "202301,202302,202303,202401,202402"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2023  0..3  anchor=1"))
        .stdout(predicate::str::contains("2024  3..5  anchor=3.5"));
}

#[test]
fn segments_text_shows_sub_period_span() {
    let mut cmd = Command::cargo_bin("periodviz").unwrap();
    cmd.args(["segments", "202311,202312,202401,202402,202403"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2023  0..2  anchor=0.5  periods 11-12"))
        .stdout(predicate::str::contains("2024  2..5  anchor=3  periods 01-03"));
}

#[test]
fn segments_json_has_boundaries() {
    let mut cmd = Command::cargo_bin("periodviz").unwrap();
    cmd.args(["segments", "202501;202502", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["groups"], serde_json::json!([2025]));
    assert_eq!(v["boundaries"], serde_json::json!([-0.5, 1.5]));
    assert_eq!(v["anchors"], serde_json::json!([0.5]));
}

#[test]
fn segments_merge_flag_joins_reappearing_years() {
    let mut cmd = Command::cargo_bin("periodviz").unwrap();
    cmd.args(["segments", "202301,202401,202302", "--merge", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["groups"], serde_json::json!([2023, 2024]));
    assert_eq!(v["labels"], serde_json::json!([202301, 202302, 202401]));
}

#[test]
fn bad_input_fails() {
    Command::cargo_bin("periodviz")
        .unwrap()
        .args(["segments", "2023x01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period label"));

    Command::cargo_bin("periodviz")
        .unwrap()
        .args(["segments", ","])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}
