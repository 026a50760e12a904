use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::info;

use models::db::Store;

use crate::routes::{self, ApiState};

/// Public entry: load config, connect the store, and run the HTTP server
/// until ctrl-c. The store client is released exactly once on the way out.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;

    let store = Arc::new(Store::connect(&cfg.store).await?);
    info!(db = %cfg.store.db_name, "document store connected");

    let state = ApiState { store: Arc::clone(&store) };
    let cors = routes::build_cors(&cfg.cors.allowed_origins);
    let app: Router = routes::build_router(cors, state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting golden citizen api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    info!("store connection released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("received ctrl-c, shutting down");
}
