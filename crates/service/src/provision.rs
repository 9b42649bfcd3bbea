//! Target-database provisioning over the maintenance connection.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::info;

use crate::errors::BootstrapError;

/// Postgres identifiers are capped at 63 bytes; names are further
/// restricted to the unquoted-safe character set before being spliced
/// into a CREATE DATABASE statement.
pub fn validate_database_name(name: &str) -> Result<(), BootstrapError> {
    let valid_start = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if name.is_empty() || name.len() > 63 || !valid_start || !valid_rest {
        return Err(BootstrapError::Provisioning(format!(
            "invalid database name {name:?}: expected [a-zA-Z_][a-zA-Z0-9_]*, max 63 chars"
        )));
    }
    Ok(())
}

/// Create the target database if it does not exist yet. Returns whether a
/// database was actually created.
pub async fn ensure_database(
    admin: &DatabaseConnection,
    name: &str,
) -> Result<bool, BootstrapError> {
    validate_database_name(name)?;

    let lookup = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT 1 AS present FROM pg_database WHERE datname = $1",
        [name.into()],
    );
    let existing = admin
        .query_one(lookup)
        .await
        .map_err(|e| BootstrapError::from_db("database lookup", e))?;
    if existing.is_some() {
        info!(database = %name, "database already present");
        return Ok(false);
    }

    // CREATE DATABASE cannot run inside a transaction, and Postgres has no
    // IF NOT EXISTS form for it; the lookup above keeps this idempotent.
    let create =
        Statement::from_string(DatabaseBackend::Postgres, format!("CREATE DATABASE \"{name}\""));
    match admin.execute(create).await {
        Ok(_) => {
            info!(database = %name, "database created");
            Ok(true)
        }
        // A concurrent bootstrap may have won the race between lookup and
        // create; "already exists" is the outcome we wanted anyway.
        Err(e) if e.to_string().contains("already exists") => {
            info!(database = %name, "database appeared concurrently");
            Ok(false)
        }
        Err(e) => Err(BootstrapError::from_db("database creation", e)),
    }
}
