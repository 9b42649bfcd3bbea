//! Bootstrap orchestration on top of the `models` entities.
//! - Provisions the target database and applies the schema migrations.
//! - Seeds the administrator account and the default system settings.
//! - Reports the resulting state for operator verification.
//! - Exposes the job operations the editing collaborator consumes.

pub mod errors;
pub mod provision;
pub mod seed;
pub mod report;
pub mod bootstrap;
pub mod jobs;
#[cfg(test)]
pub mod test_support;
