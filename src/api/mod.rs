//! HTTP 接口层
//!
//! - `/api/*`：JSON 接口（创建、查询、修改、删除、健康检查）
//! - `/`：存活提示
//! - `/{code}`：短码跳转

pub mod error_code;
pub mod helpers;
pub mod services;
pub mod types;

use actix_web::web;

use services::{api_routes, redirect_routes};

/// 注册全部路由
///
/// `/api` 必须先于 `/{code}` 注册，否则 `/api` 会被当作短码匹配。
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes());
    redirect_routes(cfg);
}
