//! Mutation operations for SeaOrmStore
//!
//! This module contains all write database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, ExprTrait, QueryFilter, SqlErr};
use tracing::{debug, error, info, warn};

use super::SeaOrmStore;
use super::converters::record_to_active_model;
use super::retry;
use crate::errors::{Result, UrlkeepError};
use crate::storage::{UrlRecord, ensure_original};

use migration::entities::url;

/// 判断是否为主键 / 唯一约束冲突
fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = err.to_string().to_lowercase();
    msg.contains("unique constraint") || msg.contains("duplicate entry") || msg.contains("duplicate key")
}

/// 截断目标地址用于日志输出
fn preview(original: &str) -> String {
    match original.char_indices().nth(50) {
        Some((idx, _)) => format!("{}...", &original[..idx]),
        None => original.to_string(),
    }
}

impl SeaOrmStore {
    /// 插入新记录；短码唯一性由主键约束保证，冲突时换一个短码重试
    pub(super) async fn insert_with_fresh_code(&self, original: &str) -> Result<UrlRecord> {
        ensure_original(original)?;

        let db = &self.db;
        for attempt in 1..=self.max_create_attempts {
            let record = UrlRecord::new(self.generator.generate(), original.to_string());

            let result = retry::with_retry(
                &format!("create({})", record.code),
                self.retry_config,
                || async { url::Entity::insert(record_to_active_model(&record)).exec(db).await },
            )
            .await;

            match result {
                Ok(_) => {
                    info!("Short link created: {}", record.code);
                    return Ok(record);
                }
                Err(e) if is_unique_violation(&e) => {
                    debug!(
                        "Short code collision on '{}' (attempt {}/{})",
                        record.code, attempt, self.max_create_attempts
                    );
                }
                Err(e) => {
                    error!("插入短链接失败: {}", e);
                    return Err(UrlkeepError::storage_failure(format!(
                        "插入短链接 '{}' 失败 (original: {}): {}",
                        record.code,
                        preview(original),
                        e
                    )));
                }
            }
        }

        warn!(
            "Gave up allocating a short code after {} attempts",
            self.max_create_attempts
        );
        Err(UrlkeepError::namespace_exhausted(format!(
            "no free short code found after {} attempts",
            self.max_create_attempts
        )))
    }

    pub(super) async fn set_original(&self, code: &str, original: &str) -> Result<bool> {
        ensure_original(original)?;

        let db = &self.db;
        let result = retry::with_retry(&format!("update({})", code), self.retry_config, || async {
            url::Entity::update_many()
                .col_expr(url::Column::Original, Expr::val(original))
                .filter(url::Column::Code.eq(code))
                .exec(db)
                .await
        })
        .await
        .map_err(|e| UrlkeepError::storage_failure(format!("更新短链接失败: {}", e)))?;

        if result.rows_affected > 0 {
            info!("Short link updated: {}", code);
            return Ok(true);
        }

        // MySQL 对未改变的行返回 0，需要再确认记录是否存在
        if self.backend_name == "mysql" {
            return Ok(self.find(code).await?.is_some());
        }
        Ok(false)
    }

    pub(super) async fn remove(&self, code: &str) -> Result<bool> {
        let db = &self.db;
        let code_owned = code.to_string();

        let result = retry::with_retry(&format!("delete({})", code), self.retry_config, || async {
            url::Entity::delete_by_id(code_owned.clone()).exec(db).await
        })
        .await
        .map_err(|e| UrlkeepError::storage_failure(format!("删除短链接失败: {}", e)))?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        info!("Short link deleted: {}", code);
        Ok(true)
    }

    /// 在 SQL 内完成 visits = visits + 1，不经过应用层的读-改-写
    pub(super) async fn bump_visits(&self, code: &str) -> Result<bool> {
        let db = &self.db;

        let result = retry::with_retry(&format!("increment({})", code), self.retry_config, || async {
            url::Entity::update_many()
                .col_expr(
                    url::Column::Visits,
                    Expr::col(url::Column::Visits).add(Expr::val(1i64)),
                )
                .filter(url::Column::Code.eq(code))
                .exec(db)
                .await
        })
        .await
        .map_err(|e| {
            error!("更新访问计数失败: {}", e);
            UrlkeepError::storage_failure(format!("更新访问计数失败: {}", e))
        })?;

        Ok(result.rows_affected > 0)
    }
}
