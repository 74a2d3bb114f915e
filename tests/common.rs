#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sbk() -> Command {
    cargo_bin_cmd!("studiobook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studiobook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema on a fresh test database
pub fn init_test_db(db_path: &str) {
    sbk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one booking through the CLI. Dates must be in the future or the
/// past-date rule rejects the request before it reaches storage.
pub fn add_booking(db_path: &str, date: &str, time: &str, duration: &str, space: &str) {
    sbk()
        .args([
            "--db", db_path, "add", date, "--time", time, "--duration", duration, "--space", space,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_test_db(db_path);

    add_booking(db_path, "2030-07-04", "14:00", "2h", "principal-zone");
    add_booking(db_path, "2030-07-04", "10:00", "1h", "natural-light");
}
