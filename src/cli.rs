//! Command-line interface definitions using clap
//!
//! Flags given on the command line override the TOML file and `UK__*`
//! environment variables.

use clap::Parser;

use crate::config::{StaticConfig, StoreBackend};

/// urlkeep - a small URL shortener service
#[derive(Parser, Debug, Default)]
#[command(name = "urlkeep")]
#[command(version)]
#[command(about = "A small URL shortener service", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (default: ./config.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Store backend: memory | database
    #[arg(long)]
    pub backend: Option<StoreBackend>,

    /// Database URL (sqlite path, mysql://, postgres://)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Print a sample config file and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// 将命令行参数覆盖到已加载的配置上
    pub fn apply_overrides(&self, config: &mut StaticConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(backend) = self.backend {
            config.store.backend = backend;
        }
        if let Some(url) = &self.database_url {
            config.database.database_url = url.clone();
        }
    }
}
