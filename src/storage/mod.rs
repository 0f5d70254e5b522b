use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{StaticConfig, StoreBackend};
use crate::errors::{Result, UrlkeepError};
use crate::utils::{CodeGenerator, RandomCodeGenerator};

pub mod backend;
pub mod memory;
pub mod models;

pub use backend::SeaOrmStore;
pub use memory::MemoryStore;
pub use models::UrlRecord;

/// Record store shared by every request handler.
///
/// Implementations own their records exclusively. Every operation is atomic
/// with respect to a single code; operations on different codes do not
/// serialise against each other beyond what the backend requires.
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// 创建新短链接，分配一个当前未被占用的短码
    async fn create(&self, original: &str) -> Result<UrlRecord>;

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>>;

    /// 替换目标地址，返回记录是否存在
    async fn update(&self, code: &str, original: &str) -> Result<bool>;

    async fn delete(&self, code: &str) -> Result<bool>;

    /// 访问计数 +1，返回记录是否存在
    async fn increment_visits(&self, code: &str) -> Result<bool>;

    async fn count(&self) -> Result<u64>;

    fn backend_name(&self) -> &'static str;

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// 校验目标地址非空
pub(crate) fn ensure_original(original: &str) -> Result<()> {
    if original.is_empty() {
        return Err(UrlkeepError::invalid_input("url must not be empty"));
    }
    Ok(())
}

pub struct StoreFactory;

impl StoreFactory {
    pub async fn create(config: &StaticConfig) -> Result<Arc<dyn UrlStore>> {
        Self::create_with_generator(config, Arc::new(RandomCodeGenerator)).await
    }

    pub async fn create_with_generator(
        config: &StaticConfig,
        generator: Arc<dyn CodeGenerator>,
    ) -> Result<Arc<dyn UrlStore>> {
        let max_attempts = config.store.max_create_attempts;
        let store: Arc<dyn UrlStore> = match config.store.backend {
            StoreBackend::Memory => Arc::new(MemoryStore::with_generator(generator, max_attempts)),
            StoreBackend::Database => {
                let backend_type = backend::infer_backend_from_url(&config.database.database_url)?;
                Arc::new(
                    SeaOrmStore::new(
                        &config.database,
                        &backend_type,
                        generator,
                        max_attempts,
                    )
                    .await?,
                )
            }
        };

        info!("Using storage backend: {}", store.backend_name());
        Ok(store)
    }
}
