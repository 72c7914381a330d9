//! HTTP server for the finance calculation engine.
//!
//! Reads the configuration directory from `FINANCE_ENGINE_CONFIG_DIR` and
//! the bind address from `FINANCE_ENGINE_ADDR`. Log filtering follows
//! `RUST_LOG`.

use std::env;
use std::error::Error;

use finance_engine::api::{AppState, create_router};
use finance_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/us_2023";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("FINANCE_ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("FINANCE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        tables = %loader.tax_year().code,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
