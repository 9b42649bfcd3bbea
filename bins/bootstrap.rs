//! Schema bootstrap for the StartWise back office.
//!
//! One command, no flags; configured entirely through environment
//! variables (see `configs`). Exits non-zero if database creation,
//! migration, or seeding fails; a reporting-probe failure is surfaced but
//! does not change the exit code.

use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let cfg = configs::AppConfig::from_env()?;
    info!(
        host = %cfg.database.host,
        port = cfg.database.port,
        database = %cfg.database.database,
        "starting schema bootstrap"
    );

    let summary = service::bootstrap::run(&cfg).await?;
    if summary.database_created {
        info!(database = %cfg.database.database, "database was created by this run");
    }
    info!("bootstrap complete");
    println!("{summary}");
    Ok(())
}
