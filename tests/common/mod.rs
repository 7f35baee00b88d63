//! Shared test utilities for progress store tests

use chrono::NaiveDate;
use tempfile::TempDir;

use lomdim::progress::{FileStorage, FixedClock, ProgressRules, ProgressStore};

/// First simulated day of every test
pub fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// Opens a file-backed store in `dir` with a controllable clock
pub fn open_store(dir: &TempDir, clock: &FixedClock) -> ProgressStore<FileStorage, FixedClock> {
    ProgressStore::open_with_clock(
        FileStorage::new(dir.path()),
        ProgressRules::default(),
        clock.clone(),
    )
    .expect("Failed to open store")
}
