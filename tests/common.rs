#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cpl() -> Command {
    cargo_bin_cmd!("carpool-ledger")
}

/// Create a unique store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carpool_ledger.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store with a roster of three and a small week of rides
pub fn init_store_with_data(store: &str) {
    cpl()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    cpl()
        .args(["--store", store, "members", "--set", "Asha, Bilal, Chen"])
        .assert()
        .success();

    // everyone, Asha drives, 75 from a guest → net 300, 100 each
    cpl()
        .args([
            "--store",
            store,
            "ride",
            "2025-09-01",
            "--slot",
            "morning",
            "--with",
            "Asha,Bilal,Chen",
            "--guest",
            "--earnings",
            "75",
            "--driver",
            "Asha",
        ])
        .assert()
        .success();

    // two regulars, Bilal drives, no guest → net 375, 188 each (187.5 → 188)
    cpl()
        .args([
            "--store",
            store,
            "ride",
            "2025-09-01",
            "--slot",
            "evening",
            "--with",
            "Bilal,Chen",
            "--driver",
            "Bilal",
        ])
        .assert()
        .success();

    // guest only → no regulars
    cpl()
        .args([
            "--store",
            store,
            "ride",
            "2025-09-02",
            "--slot",
            "morning",
            "--guest",
            "--earnings",
            "200",
        ])
        .assert()
        .success();
}
