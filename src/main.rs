//! HTTP server for the Meeting Cost Engine.
//!
//! Reads its configuration directory from `MEETING_ENGINE_CONFIG` (default
//! `./config/default`) and listens on `MEETING_ENGINE_ADDR` (default
//! `0.0.0.0:3000`). Log verbosity follows `RUST_LOG`.

use std::env;
use std::error::Error;

use meeting_cost_engine::api::{AppState, create_router};
use meeting_cost_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config_dir =
        env::var("MEETING_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("MEETING_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        engine = %config.metadata().name,
        version = %config.metadata().version,
        roles = config.salary_bands().roles().count(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Meeting cost engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
