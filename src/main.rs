//! HTTP server for the HRMS calculation engine.
//!
//! Reads `HRMS_CONFIG_DIR` (default `./config/hrms`) and `HRMS_BIND_ADDR`
//! (default `0.0.0.0:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use hrms_engine::api::{create_router, AppState};
use hrms_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/hrms";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("HRMS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("HRMS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(bind_addr = %bind_addr, "HRMS calculation engine listening");

    if let Err(err) = axum::serve(listener, create_router(AppState::new(config))).await {
        error!(error = %err, "Server terminated");
        std::process::exit(1);
    }
}
