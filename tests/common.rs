#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a developer's
/// own config file is never picked up.
pub fn wl() -> Command {
    let mut home = env::temp_dir();
    home.push("worklog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("worklog");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and log a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // Mon 2025-09-01: 08:00-12:00 + 12:30-16:30 = 8h
    wl().args(["--db", db_path, "add", "2025-09-01", "--start", "08:00", "--end", "12:00"])
        .assert()
        .success();
    wl().args(["--db", db_path, "add", "2025-09-01", "--start", "12:30", "--end", "16:30"])
        .assert()
        .success();

    // Mon 2025-09-15: 09:00-17:30
    wl().args(["--db", db_path, "add", "2025-09-15", "--start", "09:00", "--end", "17:30"])
        .assert()
        .success();
}
