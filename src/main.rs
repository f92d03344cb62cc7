//! HTTP server for the tax engine.
//!
//! Configuration is read from `TAX_ENGINE_CONFIG` (default
//! `./config/fy2022-23`) and the listen address from `TAX_ENGINE_ADDR`
//! (default `127.0.0.1:3000`). Log filtering follows `RUST_LOG`.

use std::env;
use std::error::Error;

use tax_engine::api::{AppState, create_router};
use tax_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/fy2022-23";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()?;

    let config_dir =
        env::var("TAX_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("TAX_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        assessment = %config.assessment().code,
        rounding = ?config.rounding(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Tax engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
