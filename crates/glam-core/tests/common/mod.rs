use std::path::{Path, PathBuf};

use glam_core::{Planner, PlannerBuilder};
use tempfile::TempDir;

/// Creates a temporary directory and a database path inside it
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("glam.db");
    (temp_dir, db_path)
}

/// Builds a planner backed by the SQLite file at `db_path`
pub async fn open_planner(db_path: &Path) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner")
}
