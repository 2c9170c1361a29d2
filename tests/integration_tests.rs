use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cpl, init_store_with_data, setup_test_store};

#[test]
fn test_init_creates_empty_store() {
    let store = setup_test_store("init_creates_empty_store");

    cpl()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("0 members, 0 sessions"));

    let content = fs::read_to_string(&store).expect("store file written");
    assert!(content.contains("\"members\""));
}

#[test]
fn test_members_set_add_remove() {
    let store = setup_test_store("members_set_add_remove");

    cpl()
        .args(["--store", &store, "members", "--set", "Asha, Bilal,,Asha"])
        .assert()
        .success()
        .stdout(contains("Regular members (2)"));

    cpl()
        .args([
            "--store", &store, "members", "--add", "Chen", "--remove", "Bilal",
        ])
        .assert()
        .success()
        .stdout(contains("Asha").and(contains("Chen")).and(contains("Bilal").not()));
}

#[test]
fn test_ride_overwrites_same_session() {
    let store = setup_test_store("ride_overwrites_same_session");
    init_store_with_data(&store);

    cpl()
        .args([
            "--store",
            &store,
            "ride",
            "2025-09-01",
            "--slot",
            "morning",
            "--with",
            "Chen",
            "--earnings",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("Data updated for 2025-09-01 Morning"));

    cpl()
        .args(["--store", &store, "list", "--range", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 Morning"))
        .stdout(contains("2025-09-01 Evening"))
        .stdout(contains("Asha").not());
}

#[test]
fn test_ride_rejects_unknown_member() {
    let store = setup_test_store("ride_rejects_unknown_member");
    init_store_with_data(&store);

    cpl()
        .args(["--store", &store, "ride", "2025-09-03", "--with", "Asha,Zed"])
        .assert()
        .failure()
        .stderr(contains("Unknown member: Zed"));
}

#[test]
fn test_ride_rejects_negative_earnings() {
    let store = setup_test_store("ride_rejects_negative_earnings");
    init_store_with_data(&store);

    cpl()
        .args([
            "--store",
            &store,
            "ride",
            "2025-09-03",
            "--with",
            "Asha",
            "--earnings",
            "-10",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_ride_rejects_driver_not_on_board() {
    let store = setup_test_store("ride_rejects_driver_not_on_board");
    init_store_with_data(&store);

    cpl()
        .args([
            "--store",
            &store,
            "ride",
            "2025-09-03",
            "--with",
            "Asha,Bilal",
            "--driver",
            "Chen",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid driver"));
}

#[test]
fn test_settle_prints_breakdown_and_settlement() {
    let store = setup_test_store("settle_prints_breakdown");
    init_store_with_data(&store);

    cpl()
        .args(["--store", &store, "settle"])
        .assert()
        .success()
        .stdout(contains("Daily Breakdown"))
        .stdout(contains("2025-09-01 Morning"))
        .stdout(contains("No regular members present"))
        .stdout(contains("Weekly Totals"))
        .stdout(contains("288"))
        .stdout(contains("Driver Earnings"))
        .stdout(contains("Settlement"))
        .stdout(contains("receives").and(contains("pays")));
}

#[test]
fn test_settle_without_colors_when_no_color_is_set() {
    let store = setup_test_store("settle_no_color");
    init_store_with_data(&store);

    cpl()
        .env("NO_COLOR", "1")
        .args(["--store", &store, "settle"])
        .assert()
        .success()
        .stdout(contains("No regular members present"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_settle_range_limits_sessions() {
    let store = setup_test_store("settle_range_limits_sessions");
    init_store_with_data(&store);

    cpl()
        .args(["--store", &store, "settle", "--range", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("2025-09-02 Morning"))
        .stdout(contains("2025-09-01").not())
        .stdout(contains("No regular members present"));

    cpl()
        .args(["--store", &store, "settle", "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No ride sessions recorded"));
}

#[test]
fn test_del_with_confirmation() {
    let store = setup_test_store("del_with_confirmation");
    init_store_with_data(&store);

    // declined: nothing removed
    cpl()
        .args(["--store", &store, "del", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    cpl()
        .args(["--store", &store, "del", "2025-09-01", "--slot", "evening"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("1 ride(s) deleted"));

    cpl()
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 Morning"))
        .stdout(contains("2025-09-01 Evening").not());
}

#[test]
fn test_del_missing_session_fails() {
    let store = setup_test_store("del_missing_session_fails");
    init_store_with_data(&store);

    cpl()
        .args(["--store", &store, "del", "2025-10-01", "--force"])
        .assert()
        .failure()
        .stderr(contains("No ride sessions found for 2025-10-01"));
}

#[test]
fn test_invalid_range_is_reported() {
    let store = setup_test_store("invalid_range_is_reported");
    init_store_with_data(&store);

    cpl()
        .args(["--store", &store, "list", "--range", "2025-09:2025-09-07"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}
