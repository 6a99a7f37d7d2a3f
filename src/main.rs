//! HawkerHub service binary.
//!
//! Reads its configuration from the file named by `HAWKER_HUB_CONFIG`
//! (defaults apply when unset) and serves the API.

use std::env;

use hawker_hub::api::{create_router, AppState};
use hawker_hub::config::ConfigLoader;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("HAWKER_HUB_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_config(path: Option<String>) -> Result<ConfigLoader, String> {
    match path {
        Some(path) => ConfigLoader::load(&path)
            .map_err(|e| format!("failed to load configuration from {path}: {e}")),
        None => {
            warn!("HAWKER_HUB_CONFIG not set, using default configuration");
            Ok(ConfigLoader::default())
        }
    }
}

async fn run() -> Result<(), String> {
    let loader = load_config(env::var("HAWKER_HUB_CONFIG").ok())?;

    let bind_address = loader.config().server.bind_address.clone();
    let dataset_path = loader.config().data.rental_dataset.clone();
    let state = AppState::new(loader);

    // Warm the dataset memo so a broken file shows up at startup.
    match state.rental_dataset() {
        Ok(dataset) => info!(
            path = %dataset_path.display(),
            records = dataset.len(),
            "Rental dataset ready"
        ),
        Err(err) => warn!(error = %err, "Rental dataset unavailable; insights will report errors"),
    }

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("bind {bind_address} failed: {e}"))?;
    info!(address = %bind_address, "HawkerHub listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| format!("server failed: {e}"))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    if let Err(e) = run().await {
        error!("startup failed: {e}");
        return Err(e);
    }
    Ok(())
}
