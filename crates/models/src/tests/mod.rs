use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::user::{self, UserRole, UserStatus};
use anyhow::Result;
use migration::MigratorTrait;

mod crud_tests;
mod schema_tests;

/// Connect to the configured database and make sure the schema exists.
/// The target database itself must already be present; the bootstrap
/// binary (or an operator) creates it.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = {
        let mut cfg = configs::DatabaseConfig::from_env()?;
        cfg.max_connections = cfg.max_connections.max(5);
        cfg
    };
    let db = crate::db::connect(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert a user row directly; tests need accounts without going through
/// the seed manager.
pub async fn insert_user(db: &DatabaseConnection, role: UserRole) -> Result<user::Model> {
    let marker = Uuid::new_v4().simple().to_string();
    let now = Utc::now().into();
    let am = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(format!("test_{marker}")),
        email: Set(format!("test_{marker}@example.com")),
        password_hash: Set("$argon2id$test-not-a-real-hash".into()),
        first_name: Set("Test".into()),
        last_name: Set("User".into()),
        phone: Set(None),
        role: Set(role),
        status: Set(UserStatus::Active),
        is_verified: Set(false),
        login_attempts: Set(0),
        last_login_at: Set(None),
        last_login_ip: Set(None),
        registration_ip: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub fn sample_job_fields() -> crate::job::JobFields {
    crate::job::JobFields {
        title: "Backend Engineer".into(),
        company: "StartWise".into(),
        location: "Remote".into(),
        description: "Design and operate the services behind the StartWise job platform, \
                      from schema design through deployment and observability."
            .into(),
        job_type: crate::job::JobType::FullTime,
        salary_min: Some(90_000),
        salary_max: Some(140_000),
        salary_currency: "USD".into(),
        requirements: Some("3+ years building production services".into()),
        benefits: None,
    }
}
