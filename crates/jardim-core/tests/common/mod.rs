use jardim_core::KeeperBuilder;
use tempfile::TempDir;

/// Helper function to create a test keeper
pub async fn create_test_keeper() -> (TempDir, jardim_core::Keeper) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let keeper = KeeperBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create keeper");
    (temp_dir, keeper)
}
