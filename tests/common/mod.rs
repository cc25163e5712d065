//! # Test Harness
//!
//! Provides utilities for integration testing daybook without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

use daybook::{set_home_override, storage, Calendar, Config, Session};

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary "home" (for the global config) and a
/// temporary working directory holding the task file.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/daybook/config)
    pub home_dir: TempDir,
    /// Temporary working directory
    pub work_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and changes into its working directory.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let work_dir = TempDir::new().expect("Failed to create temp work dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(work_dir.path()).expect("Failed to change to work dir");

        Self {
            home_dir,
            work_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the working directory.
    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Default task file location (`tasks.txt` in the working directory).
    pub fn data_path(&self) -> PathBuf {
        self.work_dir.path().join("tasks.txt")
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("daybook")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes the default task file.
    pub fn write_data(&self, content: &str) {
        fs::write(self.data_path(), content).expect("Failed to write task file");
    }

    /// Reads the default task file.
    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_path()).expect("Failed to read task file")
    }

    /// Loads the effective configuration (no `--file` override).
    pub fn config(&self) -> Config {
        Config::load(None).expect("config should load")
    }

    /// Opens a session on the default task file.
    pub fn session(&self) -> Session {
        Session::open(&self.config()).expect("session should open")
    }

    /// Loads the default task file into a calendar.
    pub fn load(&self) -> Calendar {
        storage::load(&self.data_path()).expect("task file should load")
    }

    /// A `daybook` binary invocation running inside this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("daybook").expect("binary should build");
        cmd.current_dir(self.work_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        set_home_override(None);
    }
}

// =============================================================================
// Task File Helpers
// =============================================================================

/// The sample file used across tests:
/// 2025-12-25 has two tasks, 2026-01-01 has one.
pub const HOLIDAYS: &str = "\
[YEAR] 2025
12 25 Christmas Day
12 25 Dinner at 6
[YEAR] 2026
1 1 New Year's Day
";

/// Creates a test environment whose task file holds [`HOLIDAYS`].
pub fn setup_with_holidays() -> TestEnv {
    let env = TestEnv::new();
    env.write_data(HOLIDAYS);
    env
}
