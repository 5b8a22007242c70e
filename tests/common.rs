#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pb() -> Command {
    cargo_bin_cmd!("punchbank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchbank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema at the given DB path
pub fn init_db(db_path: &str) {
    pb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one punch via the CLI
pub fn punch(db_path: &str, sub: &str, date: &str, at: &str) {
    pb().args(["--db", db_path, sub, "--date", date, "--at", at])
        .assert()
        .success();
}

/// Record a full plain working day (clock-in + clock-out, no breaks)
pub fn full_day(db_path: &str, date: &str, start: &str, end: &str) {
    punch(db_path, "in", date, start);
    punch(db_path, "out", date, end);
}
