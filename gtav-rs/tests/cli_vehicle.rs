//! CLI integration tests for vehicle identifier commands
//!
//! These test real invocations of the gtav-rs binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn gtav_rs() -> Command {
    Command::cargo_bin("gtav-rs").expect("binary should build")
}

#[test]
fn lookup_known_vehicle_prints_hash() {
    gtav_rs()
        .args(["vehicle", "lookup", "Adder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3078201489"))
        .stdout(predicate::str::contains("0xB779A091"));
}

#[test]
fn lookup_is_case_insensitive() {
    gtav_rs()
        .args(["vehicle", "lookup", "nightshark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("433954513"));
}

#[test]
fn lookup_unknown_vehicle_fails() {
    gtav_rs()
        .args(["vehicle", "lookup", "DoesNotExist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown vehicle model"));
}

#[test]
fn resolve_decimal_hash() {
    gtav_rs()
        .args(["vehicle", "resolve", "758895617"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZType"));
}

#[test]
fn resolve_hex_hash() {
    gtav_rs()
        .args(["vehicle", "resolve", "0xB779A091"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adder"));
}

#[test]
fn resolve_unknown_hash_fails() {
    gtav_rs()
        .args(["vehicle", "resolve", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vehicle model has hash"));
}

#[test]
fn list_with_filter_shows_matching_entries() {
    gtav_rs()
        .args(["vehicle", "list", "--filter", "utillitruck"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UtilliTruck"))
        .stdout(predicate::str::contains("UtilliTruck2"))
        .stdout(predicate::str::contains("UtilliTruck3"));
}

#[test]
fn list_with_unmatched_filter_fails() {
    gtav_rs()
        .args(["vehicle", "list", "--filter", "zzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vehicle models match"));
}
