//! Query operations for SeaOrmStore
//!
//! This module contains all read-only database operations.

use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::{error, trace};

use super::{SeaOrmStore, retry};
use crate::errors::{Result, UrlkeepError};
use crate::storage::UrlRecord;

use migration::entities::url;

use super::converters::model_to_record;

impl SeaOrmStore {
    pub(super) async fn find(&self, code: &str) -> Result<Option<UrlRecord>> {
        let db = &self.db;
        let code_owned = code.to_string();

        let result = retry::with_retry(&format!("get({})", code), self.retry_config, || async {
            url::Entity::find_by_id(code_owned.clone()).one(db).await
        })
        .await;

        match result {
            Ok(model) => {
                trace!("Database lookup for {}: hit={}", code, model.is_some());
                Ok(model.map(model_to_record))
            }
            Err(e) => {
                error!("查询短链接失败（重试后仍失败）: {}", e);
                Err(UrlkeepError::storage_failure(format!(
                    "查询短链接 '{}' 失败: {}",
                    code, e
                )))
            }
        }
    }

    pub(super) async fn count_all(&self) -> Result<u64> {
        let db = &self.db;
        retry::with_retry("count()", self.retry_config, || async {
            url::Entity::find().count(db).await
        })
        .await
        .map_err(|e| UrlkeepError::storage_failure(format!("统计短链接数量失败: {}", e)))
    }
}
