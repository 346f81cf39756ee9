//! End-to-end tests for the cashback binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cashback() -> Command {
    Command::cargo_bin("cashback").unwrap()
}

#[test]
fn classify_prints_icon_key() {
    cashback()
        .args(["classify", "АЗС Лукойл"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local_gas_station"));
}

#[test]
fn classify_unknown_name_prints_default() {
    cashback()
        .args(["classify", "Зоомагазин"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shopping_cart"));
}

#[test]
fn extract_reads_stdin_and_emits_json() {
    cashback()
        .arg("extract")
        .write_stdin("Рестораны: 5%")
        .assert()
        .success()
        .stdout(predicate::str::contains("Рестораны"))
        .stdout(predicate::str::contains("restaurant"));
}

#[test]
fn extract_empty_input_emits_empty_json() {
    cashback()
        .args(["extract", "--format", "json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn extract_csv_has_header() {
    cashback()
        .args(["extract", "--format", "csv"])
        .write_stdin("АЗС: 5%")
        .assert()
        .success()
        .stdout(predicate::str::contains("category_name,cashback_percent,icon"));
}

#[test]
fn extract_missing_file_fails() {
    cashback()
        .args(["extract", "no-such-file.txt"])
        .assert()
        .failure();
}

#[test]
fn config_show_prints_defaults() {
    cashback()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dedup_epsilon"));
}
