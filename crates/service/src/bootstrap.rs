//! The bootstrap runner: provision the database, apply migrations, seed
//! default data, then report the resulting state.
//!
//! The whole run is one sequential flow over a single connection; no step
//! starts before the previous one has committed. Concurrent bootstraps
//! against the same uninitialized target are not coordinated here;
//! operators must serialize runs.

use std::fmt;

use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::errors::BootstrapError;
use crate::report::{self, BootstrapReport};
use crate::seed::{self, SeedOutcome};

/// What a completed bootstrap did, for the operator's console.
#[derive(Debug)]
pub struct BootstrapSummary {
    pub database_created: bool,
    pub seeds: Vec<(&'static str, SeedOutcome)>,
    /// Absent when the advisory reporting probe failed.
    pub report: Option<BootstrapReport>,
}

impl fmt::Display for BootstrapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.seeds {
            writeln!(
                f,
                "seed {:<16} inserted {}, already present {}",
                name, outcome.inserted, outcome.skipped
            )?;
        }
        writeln!(f)?;
        match &self.report {
            Some(report) => write!(f, "{report}"),
            None => writeln!(f, "reporting probe failed; see log output above"),
        }
    }
}

/// Run the full bootstrap sequence against the configured target.
///
/// Fails fast on connection, provisioning, or seed errors; a reporting
/// failure is logged and reflected in the summary but does not fail the
/// run. Safe to invoke repeatedly: the second run changes nothing.
pub async fn run(cfg: &AppConfig) -> Result<BootstrapSummary, BootstrapError> {
    info!(host = %cfg.database.host, port = cfg.database.port, "connecting to maintenance database");
    let admin = models::db::connect_maintenance(&cfg.database)
        .await
        .map_err(|e| BootstrapError::Connection(e.to_string()))?;
    let created = crate::provision::ensure_database(&admin, &cfg.database.database).await;
    if let Err(e) = admin.close().await {
        warn!(error = %e, "maintenance connection did not close cleanly");
    }
    let database_created = created?;

    info!(database = %cfg.database.database, "connecting to target database");
    let db = models::db::connect(&cfg.database)
        .await
        .map_err(|e| BootstrapError::Connection(e.to_string()))?;
    let outcome = run_on(&db, cfg, database_created).await;
    match outcome {
        Ok(summary) => {
            if let Err(e) = db.close().await {
                warn!(error = %e, "target connection did not close cleanly");
            }
            Ok(summary)
        }
        // The pool is released on drop; nothing to roll back, failed runs
        // leave already-committed schema and seed state in place.
        Err(e) => Err(e),
    }
}

async fn run_on(
    db: &DatabaseConnection,
    cfg: &AppConfig,
    database_created: bool,
) -> Result<BootstrapSummary, BootstrapError> {
    info!("applying migrations");
    Migrator::up(db, None)
        .await
        .map_err(|e| BootstrapError::from_db("migration", e))?;
    info!("schema ensured");

    let mut seeds = Vec::new();
    for step in seed::default_steps(&cfg.admin) {
        let outcome = step.apply(db).await?;
        info!(
            step = step.name(),
            inserted = outcome.inserted,
            skipped = outcome.skipped,
            "seed step complete"
        );
        seeds.push((step.name(), outcome));
    }

    let report = match report::collect(db).await {
        Ok(report) => Some(report),
        Err(e) => {
            warn!(error = %e, "reporting probe failed; bootstrap outcome unaffected");
            None
        }
    };

    Ok(BootstrapSummary { database_created, seeds, report })
}
