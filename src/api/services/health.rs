use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use tracing::{error, trace};

use crate::api::helpers::json_response;
use crate::api::types::HealthResponse;
use crate::storage::UrlStore;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// 只查 count，不加载全表
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        store: web::Data<Arc<dyn UrlStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let (links_count, error) =
            match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, store.count()).await {
                Ok(Ok(count)) => {
                    trace!("Storage health check passed, {} links found", count);
                    (Some(count), None)
                }
                Ok(Err(e)) => {
                    error!("Storage health check failed: {}", e);
                    (None, Some(format!("storage error: {}", e.message())))
                }
                Err(_) => {
                    error!("Storage health check timeout");
                    (None, Some("timeout".to_string()))
                }
            };

        let is_healthy = error.is_none();
        let uptime_secs = (chrono::Utc::now() - app_start_time.start_datetime)
            .num_seconds()
            .max(0);

        let body = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            backend: store.backend_name().to_string(),
            links_count,
            uptime_secs,
            error,
        };

        trace!("Health check completed in {:?}", start_time.elapsed());

        let status = if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        json_response(status, &body)
    }
}
