#![cfg(test)]
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure provisioning and migrations run only once across the test process
static PREPARED: OnceCell<()> = OnceCell::const_new();

/// Configuration for DB-backed tests, widened beyond the bootstrap's
/// single-connection pool so parallel tests don't starve each other.
pub fn test_config() -> Result<AppConfig, anyhow::Error> {
    let mut cfg = AppConfig::from_env()?;
    cfg.database.max_connections = cfg.database.max_connections.max(10);
    Ok(cfg)
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    PREPARED
        .get_or_init(|| async {
            let cfg = test_config().expect("test config");
            let admin = models::db::connect_maintenance(&cfg.database)
                .await
                .expect("connect maintenance db");
            crate::provision::ensure_database(&admin, &cfg.database.database)
                .await
                .expect("ensure database");
            drop(admin);

            let db = models::db::connect(&cfg.database).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Return a fresh connection for the current test's runtime
    let cfg = test_config()?;
    let db = models::db::connect(&cfg.database).await?;
    Ok(db)
}
