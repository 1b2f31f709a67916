#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rmotohours::core::{BookSettings, CollectingNotifier, FixedClock, HourBook};
use rmotohours::storage::MemoryBackend;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's configuration.
pub fn rmh(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rmotohours");
    cmd.env("RMOTOHOURS_HOME", test_home(name));
    cmd
}

/// Per-test config directory inside the system temp dir
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmotohours_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmotohours.sqlite", name));
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

/// Initialize a DB through the CLI (test mode, no config written)
pub fn init_db(name: &str, db_path: &str) {
    rmh(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// In-memory book with a fixed "today" and a notifier the test can inspect.
pub fn memory_book(
    today: &str,
    settings: BookSettings,
) -> (HourBook<MemoryBackend>, CollectingNotifier) {
    memory_book_with(MemoryBackend::new(), today, settings)
}

pub fn memory_book_with(
    backend: MemoryBackend,
    today: &str,
    settings: BookSettings,
) -> (HourBook<MemoryBackend>, CollectingNotifier) {
    let notifier = CollectingNotifier::new();
    let book = HourBook::open(
        backend,
        settings,
        Box::new(FixedClock::new(today)),
        Box::new(notifier.clone()),
    );
    (book, notifier)
}
