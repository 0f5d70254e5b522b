//! Server mode
//!
//! Builds the actix-web application around an already-opened store and runs
//! it until the process receives Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use anyhow::Result;
use tracing::{debug, error, warn};

use crate::api::configure_routes;
use crate::api::services::{AppStartTime, ServiceSettings};
use crate::config::StaticConfig;
use crate::storage::UrlStore;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig, store: Arc<dyn UrlStore>) -> Result<()> {
    let app_start_time = AppStartTime::now();
    let settings = ServiceSettings::new(config.server.public_base_url.clone());

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let app_store = store.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_store.clone()))
            .app_data(web::Data::new(settings.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(configure_routes)
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let result = server.bind(&bind_address)?.run().await;

    debug!("HTTP server stopped, closing store");
    if let Err(e) = store.close().await {
        error!("Failed to close store: {}", e);
    }

    result?;
    Ok(())
}
