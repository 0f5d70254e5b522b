//! `/api` 短链接 CRUD

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{info, trace};

use super::ServiceSettings;
use crate::api::error_code::ErrorCode;
use crate::api::helpers::{error_from_store, error_response, json_response, not_found_response};
use crate::api::types::{ShortenResponse, UrlRequest, UrlResponse};
use crate::storage::UrlStore;

pub struct UrlApiService;

impl UrlApiService {
    /// POST /api/shorten
    pub async fn shorten(
        req: HttpRequest,
        body: web::Json<UrlRequest>,
        store: web::Data<Arc<dyn UrlStore>>,
        settings: web::Data<ServiceSettings>,
    ) -> impl Responder {
        match store.create(&body.url).await {
            Ok(record) => {
                info!("API: shortened {} -> {}", record.code, record.original);
                let short_url = settings.short_url(&req, &record.code);
                json_response(
                    StatusCode::OK,
                    &ShortenResponse {
                        code: record.code,
                        short_url,
                        original: record.original,
                        visits: record.visits,
                    },
                )
            }
            Err(e) => error_from_store(&e),
        }
    }

    /// GET /api/url/{code}
    pub async fn get_url(req: HttpRequest, store: web::Data<Arc<dyn UrlStore>>) -> impl Responder {
        let code = path_code(&req);
        trace!("API: fetch {}", code);

        match store.get(code).await {
            Ok(Some(record)) => json_response(StatusCode::OK, &UrlResponse::from(record)),
            Ok(None) => not_found_response(code),
            Err(e) => error_from_store(&e),
        }
    }

    /// PUT /api/url/{code}
    pub async fn update_url(
        req: HttpRequest,
        body: web::Json<UrlRequest>,
        store: web::Data<Arc<dyn UrlStore>>,
    ) -> impl Responder {
        let code = path_code(&req);

        match store.update(code, &body.url).await {
            Ok(true) => HttpResponse::NoContent().finish(),
            Ok(false) => not_found_response(code),
            Err(e) => error_from_store(&e),
        }
    }

    /// DELETE /api/url/{code}
    pub async fn delete_url(
        req: HttpRequest,
        store: web::Data<Arc<dyn UrlStore>>,
    ) -> impl Responder {
        let code = path_code(&req);

        match store.delete(code).await {
            Ok(true) => HttpResponse::NoContent().finish(),
            Ok(false) => not_found_response(code),
            Err(e) => error_from_store(&e),
        }
    }

    /// /api/url 或 /api/url/（缺少短码）
    pub async fn missing_code() -> impl Responder {
        error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::LinkEmptyCode,
            "missing code",
        )
    }
}

fn path_code(req: &HttpRequest) -> &str {
    req.match_info().query("code")
}

/// `/api` 路由
///
/// 包含：
/// - POST /api/shorten
/// - GET|PUT|DELETE /api/url/{code}（其后的路径段被忽略，如 /api/url/{code}/stats）
/// - GET /api/health
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(crate::api::helpers::json_config())
        .service(web::resource("/shorten").route(web::post().to(UrlApiService::shorten)))
        .service(web::resource(["/url", "/url/"]).to(UrlApiService::missing_code))
        .service(
            web::resource(["/url/{code}", "/url/{code}/{tail:.*}"])
                .route(web::get().to(UrlApiService::get_url))
                .route(web::put().to(UrlApiService::update_url))
                .route(web::delete().to(UrlApiService::delete_url)),
        )
        .service(web::resource("/health").route(web::get().to(super::HealthService::health_check)))
}
