use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, trace, warn};

use crate::api::helpers::error_from_store;
use crate::storage::UrlStore;
use crate::utils::is_valid_code;

pub const INDEX_MESSAGE: &str = "URL shortener is running";

pub struct RedirectService;

impl RedirectService {
    /// GET /
    pub async fn index() -> impl Responder {
        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(INDEX_MESSAGE)
    }

    /// GET /{code}：302 跳转并累加访问次数
    pub async fn handle_redirect(
        req: HttpRequest,
        store: web::Data<Arc<dyn UrlStore>>,
    ) -> impl Responder {
        let code = req.match_info().query("code");

        if !is_valid_code(code) {
            // 非法短码，直接 404（不访问存储）
            trace!("Invalid short code rejected: {}", code);
            return Self::not_found_response();
        }

        let record = match store.get(code).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("Redirect link not found: {}", code);
                return Self::not_found_response();
            }
            Err(e) => {
                error!("Storage error during redirect lookup: {}", e);
                return error_from_store(&e);
            }
        };

        // 计数失败不影响跳转
        match store.increment_visits(code).await {
            Ok(true) => {}
            Ok(false) => debug!("Link {} removed before its visit was counted", code),
            Err(e) => warn!("Failed to count visit for {}: {}", code, e),
        }

        HttpResponse::Found()
            .insert_header(("Location", record.original))
            .insert_header(("Cache-Control", "no-store"))
            .finish()
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Not Found")
    }
}

/// 根路径与短码跳转路由，必须最后注册
pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(RedirectService::index)))
        .service(
            web::resource(["/{code}", "/{code}/{tail:.*}"])
                .route(web::get().to(RedirectService::handle_redirect)),
        );
}
