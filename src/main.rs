use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use urlkeep::cli::Cli;
use urlkeep::config::StaticConfig;
use urlkeep::storage::StoreFactory;
use urlkeep::system::{init_logging, run_server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    let mut config = match StaticConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    // guard 必须存活到进程结束，否则缓冲中的日志会丢失
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };
    debug!("Loaded configuration: {:?}", config);

    let store = match StoreFactory::create(&config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "Failed to open store:".bold().red(), e.format_colored());
            std::process::exit(1);
        }
    };

    run_server(&config, store).await?;
    info!("{}", "urlkeep stopped".green());
    Ok(())
}
