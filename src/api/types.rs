//! HTTP API 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;
use crate::storage::UrlRecord;

/// POST /api/shorten 与 PUT /api/url/{code} 的请求体
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlRequest {
    /// 缺失时视为空字符串，由存储层统一拒绝
    #[serde(default)]
    pub url: String,
}

/// POST /api/shorten 的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original: String,
    pub visits: u64,
}

/// GET /api/url/{code} 的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlResponse {
    pub code: String,
    pub original: String,
    pub visits: u64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            code: record.code,
            original: record.original,
            visits: record.visits,
            created_at: record.created_at,
        }
    }
}

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

/// GET /api/health 的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub links_count: Option<u64>,
    pub uptime_secs: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
