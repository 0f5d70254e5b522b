//! API 帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};
use serde::Serialize;
use tracing::{debug, error};

use super::error_code::ErrorCode;
use super::types::ErrorResponse;
use crate::errors::UrlkeepError;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorResponse {
            code,
            message: message.to_string(),
        },
    )
}

/// 从 UrlkeepError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_store(err: &UrlkeepError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("Store operation failed: {}", err);
    }
    error_response(status, ErrorCode::from(err), err.message())
}

pub fn not_found_response(code: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::LinkNotFound,
        &format!("short code not found: {}", code),
    )
}

/// JSON 请求体配置：不要求 Content-Type，解析失败统一返回 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .content_type_required(false)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            debug!("Rejected request body: {}", err);
            let response = error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                "invalid request body",
            );
            error::InternalError::from_response(err, response).into()
        })
}
