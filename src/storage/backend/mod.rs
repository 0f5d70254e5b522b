//! SeaORM storage backend
//!
//! Durable storage for URL records on SQLite, MySQL/MariaDB or PostgreSQL.
//! Every operation is a single SQL statement, so per-record atomicity comes
//! from the engine rather than from an application lock.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::errors::{Result, UrlkeepError};
use crate::storage::{UrlRecord, UrlStore};
use crate::utils::CodeGenerator;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_record, record_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(UrlkeepError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> &'static str {
    match backend {
        "mysql" | "mariadb" => "mysql",
        "postgres" | "postgresql" => "postgres",
        _ => "sqlite",
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
    backend_name: &'static str,
    retry_config: retry::RetryConfig,
    generator: Arc<dyn CodeGenerator>,
    max_create_attempts: u32,
}

impl SeaOrmStore {
    pub async fn new(
        config: &DatabaseConfig,
        backend_name: &str,
        generator: Arc<dyn CodeGenerator>,
        max_create_attempts: u32,
    ) -> Result<Self> {
        let database_url = config.database_url.as_str();
        if database_url.is_empty() {
            return Err(UrlkeepError::database_config("database_url 未设置"));
        }

        let backend_name = normalize_backend_name(backend_name);
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config).await?
        } else {
            connect_generic(database_url, backend_name, config).await?
        };

        let store = SeaOrmStore {
            db,
            backend_name,
            retry_config: retry::RetryConfig {
                max_retries: config.retry_count,
                base_delay_ms: config.retry_base_delay_ms,
                max_delay_ms: config.retry_max_delay_ms,
            },
            generator,
            max_create_attempts: max_create_attempts.max(1),
        };

        run_migrations(&store.db).await?;

        warn!("{} storage initialized.", backend_name.to_uppercase());
        Ok(store)
    }
}

#[async_trait]
impl UrlStore for SeaOrmStore {
    async fn create(&self, original: &str) -> Result<UrlRecord> {
        self.insert_with_fresh_code(original).await
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>> {
        self.find(code).await
    }

    async fn update(&self, code: &str, original: &str) -> Result<bool> {
        self.set_original(code, original).await
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        self.remove(code).await
    }

    async fn increment_visits(&self, code: &str) -> Result<bool> {
        self.bump_visits(code).await
    }

    async fn count(&self) -> Result<u64> {
        self.count_all().await
    }

    fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| UrlkeepError::storage_failure(format!("关闭数据库连接失败: {}", e)))
    }
}
