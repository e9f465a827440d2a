use athlete_core::{Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a tracker over a fresh on-disk database
pub fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
