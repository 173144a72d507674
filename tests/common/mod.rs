use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;
use timesheet_core::{core::SheetManager, storage::JsonStorage};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Registers a fresh temporary directory and returns its path.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated manager backed by a unique directory for each test.
#[allow(dead_code)]
pub fn setup_manager() -> SheetManager {
    manager_at(temp_base())
}

/// Opens a manager rooted at the given directory.
#[allow(dead_code)]
pub fn manager_at(base: PathBuf) -> SheetManager {
    let storage = JsonStorage::new(Some(base), Some(3)).expect("create json storage backend");
    SheetManager::open(Box::new(storage)).expect("open sheet manager")
}
