mod common;
use common::{cpl, init_store_with_data, setup_test_store, temp_out};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_xlsx_all() {
    let store = setup_test_store("export_xlsx_all");
    init_store_with_data(&store);

    let out = temp_out("export_xlsx_all", "xlsx");

    cpl()
        .args(["--store", &store, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_json_contains_every_output() {
    let store = setup_test_store("export_json_outputs");
    init_store_with_data(&store);

    let out = temp_out("export_json_outputs", "json");

    cpl()
        .args(["--store", &store, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["members"].as_array().map(|a| a.len()), Some(3));
    assert!(doc["sessions"]["2025-09-01 Morning"].is_object());
    assert_eq!(
        doc["daily_breakdown"]["2025-09-02 Morning"]["note"],
        "No regular members present"
    );
    assert_eq!(doc["daily_breakdown"]["2025-09-01 Evening"]["cost_per_person"], 188.0);
    assert_eq!(doc["weekly_totals"]["Bilal"], 288.0);
    assert_eq!(doc["driver_earnings"]["Asha"], 300.0);
    assert_eq!(doc["settlement"]["Asha"], 200.0);
    assert_eq!(doc["settlement"]["Bilal"], 87.0);
    assert_eq!(doc["settlement"]["Chen"], -288.0);
}

#[test]
fn test_export_csv_writes_one_file_per_table() {
    let store = setup_test_store("export_csv_tables");
    init_store_with_data(&store);

    let out = temp_out("export_csv_tables", "csv");
    let base = Path::new(&out);
    let stem = base.file_stem().unwrap().to_string_lossy().to_string();
    let table_file = |slug: &str| base.with_file_name(format!("{stem}_{slug}.csv"));

    for slug in [
        "attendance",
        "external_earnings",
        "drivers",
        "daily_breakdown",
        "weekly_totals",
        "driver_earnings",
        "settlements",
    ] {
        fs::remove_file(table_file(slug)).ok();
    }

    cpl()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--range", "2025-09",
        ])
        .assert()
        .success();

    let attendance = fs::read_to_string(table_file("attendance")).expect("attendance csv");
    assert!(attendance.starts_with("session,attendee,regular"));
    assert!(attendance.contains("2025-09-01 Morning,QuickRide Guest,no"));

    let drivers = fs::read_to_string(table_file("drivers")).expect("drivers csv");
    assert!(drivers.contains("2025-09-01 Evening,Bilal"));

    let settlements = fs::read_to_string(table_file("settlements")).expect("settlements csv");
    assert!(settlements.contains("Chen,-288"));

    // a second run without --force must not silently overwrite
    cpl()
        .args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
}

#[test]
fn test_export_requires_absolute_path() {
    let store = setup_test_store("export_requires_absolute");
    init_store_with_data(&store);

    cpl()
        .args([
            "--store", &store, "export", "--format", "json", "--file", "relative.json",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let store = setup_test_store("export_empty_range");
    init_store_with_data(&store);

    let out = temp_out("export_empty_range", "xlsx");

    cpl()
        .args([
            "--store", &store, "export", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success()
        .stdout(contains("No ride sessions found"));

    assert!(!Path::new(&out).exists());
}
