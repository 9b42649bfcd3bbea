//! Connection helpers built from [`configs::DatabaseConfig`].
//!
//! The bootstrap owns its connection for the whole run: acquired here,
//! released when the pool is closed or dropped on any exit path.

use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

fn options(cfg: &DatabaseConfig, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(cfg.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

/// Connect to the configured target database.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(options(cfg, cfg.url())).await?;
    Ok(db)
}

/// Connect to the server-level maintenance database, used to create the
/// target database before it exists.
pub async fn connect_maintenance(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(options(cfg, cfg.maintenance_url())).await?;
    Ok(db)
}
