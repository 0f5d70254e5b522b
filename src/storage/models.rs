use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL as seen by callers of the store.
///
/// Values handed out by a store are snapshots; mutating one never touches the
/// stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub code: String,
    pub original: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub visits: u64,
}

impl UrlRecord {
    /// 新记录：visits 为 0，created_at 截断到微秒以便各数据库原样往返
    pub fn new(code: String, original: String) -> Self {
        Self {
            code,
            original,
            created_at: Utc::now().trunc_subsecs(6),
            visits: 0,
        }
    }
}
