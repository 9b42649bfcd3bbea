//! Idempotent default-data seeding.
//!
//! Each step is insert-or-skip keyed on a unique column: an existing row
//! is never overwritten, and a unique-key violation from a concurrent run
//! is the benign "already seeded" outcome. Any other failure aborts the
//! bootstrap rather than leaving partial seed state silently.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::Utc;
use configs::AdminConfig;
use rand::rngs::OsRng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, SqlErr};
use tracing::{debug, info, warn};
use uuid::Uuid;

use models::system_setting::{self, SettingType};
use models::user::{self, UserRole, UserStatus};

use crate::errors::BootstrapError;

/// What a seed step did: rows written vs. rows already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

/// One idempotent unit of default data. Steps are order-independent
/// relative to each other; the runner executes them sequentially.
#[async_trait]
pub trait SeedStep: Send + Sync {
    fn name(&self) -> &'static str;
    async fn apply(&self, db: &DatabaseConnection) -> Result<SeedOutcome, BootstrapError>;
}

/// The steps a standard bootstrap applies, in order.
pub fn default_steps(admin: &AdminConfig) -> Vec<Box<dyn SeedStep>> {
    vec![
        Box::new(AdminSeeder { cfg: admin.clone() }),
        Box::new(SettingsSeeder { entries: DEFAULT_SETTINGS }),
    ]
}

/// Hash a credential with argon2id. The salt is random per call and the
/// work factor is the library default, which is deliberately slow.
pub fn hash_password(plain: &str) -> Result<String, BootstrapError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| BootstrapError::Seed(format!("password hashing failed: {e}")))
}

/// Ensures exactly one administrator account exists, keyed on its unique
/// email. Re-seeding never touches an existing admin's fields.
pub struct AdminSeeder {
    pub cfg: AdminConfig,
}

#[async_trait]
impl SeedStep for AdminSeeder {
    fn name(&self) -> &'static str {
        "admin account"
    }

    async fn apply(&self, db: &DatabaseConnection) -> Result<SeedOutcome, BootstrapError> {
        if let Some(existing) = user::find_by_email(db, &self.cfg.email).await? {
            debug!(user_id = %existing.id, "administrator already present, leaving untouched");
            return Ok(SeedOutcome { inserted: 0, skipped: 1 });
        }

        if self.cfg.default_password {
            warn!(
                "administrator uses the built-in development credential; \
                 set ADMIN_PASSWORD and rotate before exposing this deployment"
            );
        }

        let hash = hash_password(&self.cfg.password)?;
        let now = Utc::now().into();
        let am = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(self.cfg.username.clone()),
            email: Set(self.cfg.email.clone()),
            password_hash: Set(hash),
            first_name: Set(self.cfg.first_name.clone()),
            last_name: Set(self.cfg.last_name.clone()),
            phone: Set(None),
            role: Set(UserRole::Admin),
            status: Set(UserStatus::Active),
            is_verified: Set(true),
            login_attempts: Set(0),
            last_login_at: Set(None),
            last_login_ip: Set(None),
            registration_ip: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        match am.insert(db).await {
            Ok(created) => {
                info!(user_id = %created.id, email = %created.email, "administrator seeded");
                Ok(SeedOutcome { inserted: 1, skipped: 0 })
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    debug!("administrator seeded concurrently, skipping");
                    Ok(SeedOutcome { inserted: 0, skipped: 1 })
                }
                _ => Err(BootstrapError::Seed(format!("admin insert failed: {e}"))),
            },
        }
    }
}

/// A named configuration entry seeded at bootstrap.
#[derive(Debug, Clone)]
pub struct SettingSeed {
    pub key: &'static str,
    pub value: &'static str,
    pub value_type: SettingType,
    pub description: &'static str,
    pub is_public: bool,
}

pub const DEFAULT_SETTINGS: &[SettingSeed] = &[
    SettingSeed {
        key: "site_name",
        value: "StartWise",
        value_type: SettingType::String,
        description: "Public site name",
        is_public: true,
    },
    SettingSeed {
        key: "site_description",
        value: "Find your dream job with StartWise",
        value_type: SettingType::String,
        description: "Tagline shown on public pages",
        is_public: true,
    },
    SettingSeed {
        key: "max_login_attempts",
        value: "5",
        value_type: SettingType::Number,
        description: "Failed logins before an account is locked",
        is_public: false,
    },
    SettingSeed {
        key: "session_timeout",
        value: "3600",
        value_type: SettingType::Number,
        description: "Session lifetime in seconds",
        is_public: false,
    },
    SettingSeed {
        key: "allow_registration",
        value: "true",
        value_type: SettingType::Boolean,
        description: "Whether new accounts may self-register",
        is_public: true,
    },
    SettingSeed {
        key: "maintenance_mode",
        value: "false",
        value_type: SettingType::Boolean,
        description: "Disable the public site for maintenance",
        is_public: true,
    },
];

/// Ensures every named setting exists, keyed on `setting_key`. Existing
/// values (possibly operator-tuned) are never overwritten.
pub struct SettingsSeeder {
    pub entries: &'static [SettingSeed],
}

#[async_trait]
impl SeedStep for SettingsSeeder {
    fn name(&self) -> &'static str {
        "system settings"
    }

    async fn apply(&self, db: &DatabaseConnection) -> Result<SeedOutcome, BootstrapError> {
        let mut outcome = SeedOutcome::default();
        for entry in self.entries {
            if system_setting::find_by_key(db, entry.key).await?.is_some() {
                debug!(key = entry.key, "setting already present, leaving untouched");
                outcome.skipped += 1;
                continue;
            }
            let am = system_setting::ActiveModel {
                id: Set(Uuid::new_v4()),
                setting_key: Set(entry.key.to_string()),
                setting_value: Set(entry.value.to_string()),
                value_type: Set(entry.value_type.clone()),
                description: Set(Some(entry.description.to_string())),
                is_public: Set(entry.is_public),
                updated_by: Set(None),
                updated_at: Set(Utc::now().into()),
            };
            match am.insert(db).await {
                Ok(_) => {
                    info!(key = entry.key, "setting seeded");
                    outcome.inserted += 1;
                }
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        debug!(key = entry.key, "setting seeded concurrently, skipping");
                        outcome.skipped += 1;
                    }
                    _ => {
                        return Err(BootstrapError::Seed(format!(
                            "setting {:?} insert failed: {e}",
                            entry.key
                        )))
                    }
                },
            }
        }
        Ok(outcome)
    }
}
