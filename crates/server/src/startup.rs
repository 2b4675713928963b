use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{runtime, storage::LocalFileStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    runtime::ensure_env(&cfg.storage.upload_dir).await?;

    let db = match models::db::connect_with_config(&cfg.database).await {
        Ok(db) => db,
        Err(e) => {
            error!(event = "db_connect_failed", error = %e, "cannot reach the database");
            return Err(StartupError::Database(e.to_string()).into());
        }
    };
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrations_applied", "schema up to date");

    let state = ServerState {
        db,
        files: Arc::new(LocalFileStore::new(&cfg.storage.upload_dir)),
    };
    let app: Router = routes::build_router(state, build_cors(), &cfg.storage);

    let addr = bind_addr(&cfg)?;
    info!(%addr, upload_dir = %cfg.storage.upload_dir, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}
