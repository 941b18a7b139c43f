use pizack_core::{PizzaStore, PizzaStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a file-backed test store
pub async fn create_test_store() -> (TempDir, PizzaStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir).await;
    (temp_dir, store)
}

/// Open a store over an existing data directory
pub async fn open_store(temp_dir: &TempDir) -> PizzaStore {
    PizzaStoreBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create store")
}
