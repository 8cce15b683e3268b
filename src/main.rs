use std::{path::Path, sync::Arc};

use config::Config;
use tracing_subscriber::EnvFilter;
use trends::GoogleTrends;

mod config;
mod error;
mod regions;
mod trends;
mod web;

/// Used when `RUST_LOG` isn't set (or can't be parsed). tower_http logs each
/// request at debug.
const DEFAULT_LOG_FILTER: &str = "info,trendscope=debug,tower_http=debug";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = Config::read_or_default(Path::new(&config_path))?;

    let provider = GoogleTrends::new(config.trends.request_timeout())?;
    web::run(config, Arc::new(provider)).await
}
