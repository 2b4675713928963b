use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

/// Connect a pool sized and timed from `[database]`.
///
/// An in-memory SQLite URL is pinned to a single long-lived connection since
/// every new connection opens its own empty database.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_sqlite() && cfg.url.contains(":memory:") {
        // the database lives and dies with this one connection
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(cfg.idle_timeout())
            .max_lifetime(cfg.max_lifetime());
    }
    let db = Database::connect(opt).await?;
    info!(sqlite = cfg.is_sqlite(), max_connections = cfg.max_connections, "database pool connected");
    Ok(db)
}
