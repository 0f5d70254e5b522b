//! In-memory storage backend
//!
//! Records live in a single `HashMap` behind a `parking_lot::RwLock`: shared
//! for lookups, exclusive for every mutation. The lock is never held across an
//! `.await`, so every operation completes without suspending.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, trace, warn};

use super::{UrlRecord, UrlStore, ensure_original};
use crate::errors::{Result, UrlkeepError};
use crate::utils::{CodeGenerator, RandomCodeGenerator};

/// 默认的短码生成最大尝试次数
pub const DEFAULT_MAX_CREATE_ATTEMPTS: u32 = 64;

pub struct MemoryStore {
    records: RwLock<HashMap<String, UrlRecord>>,
    generator: Arc<dyn CodeGenerator>,
    max_create_attempts: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_generator(Arc::new(RandomCodeGenerator), DEFAULT_MAX_CREATE_ATTEMPTS)
    }

    pub fn with_generator(generator: Arc<dyn CodeGenerator>, max_create_attempts: u32) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            generator,
            max_create_attempts: max_create_attempts.max(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn create(&self, original: &str) -> Result<UrlRecord> {
        ensure_original(original)?;

        // 检查与插入在同一把写锁内完成，不存在 check-then-insert 竞争
        let mut records = self.records.write();
        for attempt in 1..=self.max_create_attempts {
            let code = self.generator.generate();
            match records.entry(code) {
                Entry::Occupied(entry) => {
                    debug!(
                        "Short code collision on '{}' (attempt {}/{})",
                        entry.key(),
                        attempt,
                        self.max_create_attempts
                    );
                }
                Entry::Vacant(entry) => {
                    let record = UrlRecord::new(entry.key().clone(), original.to_string());
                    entry.insert(record.clone());
                    info!("Short link created: {}", record.code);
                    return Ok(record);
                }
            }
        }

        warn!(
            "Gave up allocating a short code after {} attempts ({} links stored)",
            self.max_create_attempts,
            records.len()
        );
        Err(UrlkeepError::namespace_exhausted(format!(
            "no free short code found after {} attempts",
            self.max_create_attempts
        )))
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>> {
        let record = self.records.read().get(code).cloned();
        trace!("Memory lookup for {}: hit={}", code, record.is_some());
        Ok(record)
    }

    async fn update(&self, code: &str, original: &str) -> Result<bool> {
        ensure_original(original)?;

        let mut records = self.records.write();
        match records.get_mut(code) {
            Some(record) => {
                record.original = original.to_string();
                info!("Short link updated: {}", code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let removed = self.records.write().remove(code).is_some();
        if removed {
            info!("Short link deleted: {}", code);
        }
        Ok(removed)
    }

    async fn increment_visits(&self, code: &str) -> Result<bool> {
        let mut records = self.records.write();
        match records.get_mut(code) {
            Some(record) => {
                record.visits = record.visits.saturating_add(1);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.read().len() as u64)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
