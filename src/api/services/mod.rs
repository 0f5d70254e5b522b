pub mod health;
pub mod redirect;
pub mod url_api;

use actix_web::HttpRequest;

pub use health::{AppStartTime, HealthService};
pub use redirect::{RedirectService, redirect_routes};
pub use url_api::{UrlApiService, api_routes};

/// 处理器共享的只读设置
#[derive(Clone, Debug, Default)]
pub struct ServiceSettings {
    /// 拼接 short_url 时使用的外部地址，未配置时取请求的 scheme 与 Host
    pub public_base_url: Option<String>,
}

impl ServiceSettings {
    pub fn new(public_base_url: Option<String>) -> Self {
        Self {
            public_base_url: public_base_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn short_url(&self, req: &HttpRequest, code: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), code),
            None => {
                let info = req.connection_info();
                format!("{}://{}/{}", info.scheme(), info.host(), code)
            }
        }
    }
}
