//! Migrator registering entity-specific migrations in dependency order.
//! `users` comes first (five other tables reference it), then `jobs`, then
//! the tables that only reference those two. Indexes are applied last.
//!
//! Every `create_table` uses `if_not_exists`, so the full sequence is safe
//! to run repeatedly. Known limitation: a pre-existing table created with
//! an incompatible legacy shape is neither detected nor repaired.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_jobs;
mod m20240101_000003_create_applications;
mod m20240101_000004_create_testimonials;
mod m20240101_000005_create_admin_activity_logs;
mod m20240101_000006_create_system_settings;
mod m20240101_000007_create_analytics_records;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_jobs::Migration),
            Box::new(m20240101_000003_create_applications::Migration),
            Box::new(m20240101_000004_create_testimonials::Migration),
            Box::new(m20240101_000005_create_admin_activity_logs::Migration),
            Box::new(m20240101_000006_create_system_settings::Migration),
            Box::new(m20240101_000007_create_analytics_records::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
