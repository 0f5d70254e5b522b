//! Store contract tests
//!
//! The same behaviour is checked against the in-memory store and the SQLite
//! store, so both backends stay interchangeable behind `UrlStore`.

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::TempDir;

use urlkeep::config::DatabaseConfig;
use urlkeep::errors::UrlkeepError;
use urlkeep::storage::{MemoryStore, SeaOrmStore, UrlStore};
use urlkeep::utils::{RandomCodeGenerator, is_valid_code};

// =============================================================================
// Test Setup
// =============================================================================

fn memory_store() -> Arc<dyn UrlStore> {
    Arc::new(MemoryStore::new())
}

/// TempDir 必须与 store 一起存活
async fn sqlite_store() -> (Arc<dyn UrlStore>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        database_url: temp_dir.path().join("contract.db").display().to_string(),
        ..Default::default()
    };
    let store = SeaOrmStore::new(&config, "sqlite", Arc::new(RandomCodeGenerator), 64)
        .await
        .expect("Failed to create sqlite store");
    (Arc::new(store), temp_dir)
}

// =============================================================================
// Contract checks
// =============================================================================

async fn check_create_shape(store: Arc<dyn UrlStore>) {
    let record = store.create("https://example.com/a").await.unwrap();
    assert!(is_valid_code(&record.code), "bad code: {}", record.code);
    assert_eq!(record.original, "https://example.com/a");
    assert_eq!(record.visits, 0);
}

async fn check_codes_are_unique(store: Arc<dyn UrlStore>) {
    let mut codes = HashSet::new();
    for i in 0..200 {
        let record = store.create(&format!("https://example.com/{}", i)).await.unwrap();
        assert!(codes.insert(record.code));
    }
    assert_eq!(store.count().await.unwrap(), 200);
}

async fn check_round_trip(store: Arc<dyn UrlStore>) {
    let created = store.create("https://example.com/x").await.unwrap();
    let fetched = store.get(&created.code).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

async fn check_get_missing(store: Arc<dyn UrlStore>) {
    assert!(store.get("ZZZZZZ").await.unwrap().is_none());
    assert!(store.get("nonexistent").await.unwrap().is_none());
    assert!(store.get("").await.unwrap().is_none());
}

async fn check_update_isolation(store: Arc<dyn UrlStore>) {
    let created = store.create("https://a.example").await.unwrap();
    store.increment_visits(&created.code).await.unwrap();
    store.increment_visits(&created.code).await.unwrap();

    assert!(store.update(&created.code, "https://b.example").await.unwrap());

    let fetched = store.get(&created.code).await.unwrap().unwrap();
    assert_eq!(fetched.original, "https://b.example");
    assert_eq!(fetched.visits, 2);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.code, created.code);
}

async fn check_update_same_value(store: Arc<dyn UrlStore>) {
    let created = store.create("https://same.example").await.unwrap();
    assert!(store.update(&created.code, "https://same.example").await.unwrap());
}

async fn check_update_missing(store: Arc<dyn UrlStore>) {
    assert!(!store.update("ZZZZZZ", "https://b.example").await.unwrap());
    assert!(store.get("ZZZZZZ").await.unwrap().is_none());
}

async fn check_update_rejects_empty(store: Arc<dyn UrlStore>) {
    let created = store.create("https://keep.example").await.unwrap();
    let err = store.update(&created.code, "").await.unwrap_err();
    assert!(matches!(err, UrlkeepError::InvalidInput(_)));

    let fetched = store.get(&created.code).await.unwrap().unwrap();
    assert_eq!(fetched.original, "https://keep.example");
}

async fn check_create_rejects_empty(store: Arc<dyn UrlStore>) {
    let err = store.create("").await.unwrap_err();
    assert!(matches!(err, UrlkeepError::InvalidInput(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

async fn check_delete_finality(store: Arc<dyn UrlStore>) {
    let created = store.create("https://gone.example").await.unwrap();
    assert!(store.delete(&created.code).await.unwrap());

    assert!(store.get(&created.code).await.unwrap().is_none());
    assert!(!store.update(&created.code, "https://x.example").await.unwrap());
    assert!(!store.increment_visits(&created.code).await.unwrap());
    assert!(!store.delete(&created.code).await.unwrap());
}

async fn check_increment_missing(store: Arc<dyn UrlStore>) {
    assert!(!store.increment_visits("ZZZZZZ").await.unwrap());
    assert!(store.get("ZZZZZZ").await.unwrap().is_none());
}

async fn check_concurrent_increments(store: Arc<dyn UrlStore>) {
    let created = store.create("https://busy.example").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let store = store.clone();
        let code = created.code.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..20 {
                assert!(store.increment_visits(&code).await.unwrap());
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let fetched = store.get(&created.code).await.unwrap().unwrap();
    assert_eq!(fetched.visits, 1000);
}

async fn check_concurrent_creates(store: Arc<dyn UrlStore>) {
    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let mut codes = Vec::new();
            for j in 0..10 {
                let record = store
                    .create(&format!("https://example.com/{}/{}", i, j))
                    .await
                    .unwrap();
                codes.push(record.code);
            }
            codes
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        for code in handle.await.unwrap() {
            assert!(all.insert(code));
        }
    }
    assert_eq!(all.len(), 200);
    assert_eq!(store.count().await.unwrap(), 200);
}

/// 典型生命周期：创建 → 访问 → 修改 → 删除
async fn check_lifecycle(store: Arc<dyn UrlStore>) {
    let created = store.create("https://example.com").await.unwrap();
    let code = created.code.clone();

    for _ in 0..5 {
        assert!(store.increment_visits(&code).await.unwrap());
    }
    assert_eq!(store.get(&code).await.unwrap().unwrap().visits, 5);

    assert!(store.update(&code, "https://example.org").await.unwrap());
    let fetched = store.get(&code).await.unwrap().unwrap();
    assert_eq!(fetched.original, "https://example.org");
    assert_eq!(fetched.visits, 5);

    assert!(store.delete(&code).await.unwrap());
    assert!(store.get(&code).await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 0);
}

// =============================================================================
// Memory backend
// =============================================================================

mod memory {
    use super::*;

    #[tokio::test]
    async fn create_shape() {
        check_create_shape(memory_store()).await;
    }

    #[tokio::test]
    async fn codes_are_unique() {
        check_codes_are_unique(memory_store()).await;
    }

    #[tokio::test]
    async fn round_trip() {
        check_round_trip(memory_store()).await;
    }

    #[tokio::test]
    async fn get_missing() {
        check_get_missing(memory_store()).await;
    }

    #[tokio::test]
    async fn update_isolation() {
        check_update_isolation(memory_store()).await;
    }

    #[tokio::test]
    async fn update_same_value() {
        check_update_same_value(memory_store()).await;
    }

    #[tokio::test]
    async fn update_missing() {
        check_update_missing(memory_store()).await;
    }

    #[tokio::test]
    async fn update_rejects_empty() {
        check_update_rejects_empty(memory_store()).await;
    }

    #[tokio::test]
    async fn create_rejects_empty() {
        check_create_rejects_empty(memory_store()).await;
    }

    #[tokio::test]
    async fn delete_finality() {
        check_delete_finality(memory_store()).await;
    }

    #[tokio::test]
    async fn increment_missing() {
        check_increment_missing(memory_store()).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments() {
        check_concurrent_increments(memory_store()).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates() {
        check_concurrent_creates(memory_store()).await;
    }

    #[tokio::test]
    async fn lifecycle() {
        check_lifecycle(memory_store()).await;
    }
}

// =============================================================================
// SQLite backend
// =============================================================================

mod sqlite {
    use super::*;

    #[tokio::test]
    async fn create_shape() {
        let (store, _dir) = sqlite_store().await;
        check_create_shape(store).await;
    }

    #[tokio::test]
    async fn codes_are_unique() {
        let (store, _dir) = sqlite_store().await;
        check_codes_are_unique(store).await;
    }

    #[tokio::test]
    async fn round_trip() {
        let (store, _dir) = sqlite_store().await;
        check_round_trip(store).await;
    }

    #[tokio::test]
    async fn get_missing() {
        let (store, _dir) = sqlite_store().await;
        check_get_missing(store).await;
    }

    #[tokio::test]
    async fn update_isolation() {
        let (store, _dir) = sqlite_store().await;
        check_update_isolation(store).await;
    }

    #[tokio::test]
    async fn update_same_value() {
        let (store, _dir) = sqlite_store().await;
        check_update_same_value(store).await;
    }

    #[tokio::test]
    async fn update_missing() {
        let (store, _dir) = sqlite_store().await;
        check_update_missing(store).await;
    }

    #[tokio::test]
    async fn update_rejects_empty() {
        let (store, _dir) = sqlite_store().await;
        check_update_rejects_empty(store).await;
    }

    #[tokio::test]
    async fn create_rejects_empty() {
        let (store, _dir) = sqlite_store().await;
        check_create_rejects_empty(store).await;
    }

    #[tokio::test]
    async fn delete_finality() {
        let (store, _dir) = sqlite_store().await;
        check_delete_finality(store).await;
    }

    #[tokio::test]
    async fn increment_missing() {
        let (store, _dir) = sqlite_store().await;
        check_increment_missing(store).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments() {
        let (store, _dir) = sqlite_store().await;
        check_concurrent_increments(store).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates() {
        let (store, _dir) = sqlite_store().await;
        check_concurrent_creates(store).await;
    }

    #[tokio::test]
    async fn lifecycle() {
        let (store, _dir) = sqlite_store().await;
        check_lifecycle(store).await;
    }
}
