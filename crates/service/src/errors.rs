use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy for the bootstrap run.
///
/// `Connection` and `Provisioning` abort the run immediately. `Constraint`
/// is the expected outcome of racing an insert-or-skip seed and is
/// swallowed on those paths only. `Reporting` is advisory and never turns
/// a successful bootstrap into a failure exit.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("provisioning error: {0}")]
    Provisioning(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("seed error: {0}")]
    Seed(String),
    #[error("reporting error: {0}")]
    Reporting(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl BootstrapError {
    /// Classify a database error: reachability/authentication problems are
    /// `Connection`, everything else during schema work is `Provisioning`.
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err {
            DbErr::Conn(e) => Self::Connection(format!("{context}: {e}")),
            DbErr::ConnectionAcquire(e) => Self::Connection(format!("{context}: {e}")),
            other => Self::Provisioning(format!("{context}: {other}")),
        }
    }
}
