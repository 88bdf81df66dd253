// src/main.rs
use std::sync::Arc;

use anyhow::Context;
use fula_pinning_gateway::config::{self, FulaConfig, Settings};
use fula_pinning_gateway::{create_router, AppState, ClusterClient, LedgerClient, StaticTokens};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let fula = FulaConfig::load(&settings.config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(&fula))
        .init();

    let tokens = StaticTokens::new(settings.auth_tokens.iter().cloned());
    if tokens.is_empty() {
        warn!("PINNING_AUTH_TOKENS is empty, every request will be rejected");
    } else {
        info!(tokens = tokens.len(), "loaded accepted bearer tokens");
    }

    let ledger = LedgerClient::new(&settings.ledger_url).context("building ledger client")?;
    let cluster = ClusterClient::new(&settings.cluster_api_url);

    let state = AppState::new(
        Arc::new(tokens),
        ledger,
        Arc::new(cluster),
        &fula.pool_name,
    );
    let app = create_router(state, &settings.api_prefix);

    info!(
        addr = %settings.listen_addr,
        ledger = %settings.ledger_url,
        cluster = %settings.cluster_api_url,
        pool = %fula.pool_name,
        "pinning gateway listening"
    );
    let listener = TcpListener::bind(settings.listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
