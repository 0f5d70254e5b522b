use crate::storage::UrlRecord;
use migration::entities::url;

/// 将 Sea-ORM Model 转换为 UrlRecord
pub fn model_to_record(model: url::Model) -> UrlRecord {
    UrlRecord {
        code: model.code,
        original: model.original,
        created_at: model.created_at,
        visits: model.visits.max(0) as u64,
    }
}

/// 将新建的 UrlRecord 转换为 ActiveModel（仅用于插入）
pub fn record_to_active_model(record: &UrlRecord) -> url::ActiveModel {
    use sea_orm::ActiveValue::Set;

    url::ActiveModel {
        code: Set(record.code.clone()),
        original: Set(record.original.clone()),
        created_at: Set(record.created_at),
        visits: Set(record.visits.min(i64::MAX as u64) as i64),
    }
}
