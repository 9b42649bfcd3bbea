//! Post-bootstrap verification probe. Read-only and advisory: a failure
//! here is reported to the operator but never rolls back or fails an
//! otherwise successful bootstrap.

use std::fmt;

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveEnum, DatabaseConnection, EntityTrait, PaginatorTrait};

use models::{
    admin_activity_log, analytics_record, application, job, system_setting, testimonial, user,
};

use crate::errors::BootstrapError;

/// Entity names accepted by [`count_rows`], in report order.
pub const ENTITY_NAMES: &[&str] = &[
    "users",
    "jobs",
    "applications",
    "testimonials",
    "admin_activity_logs",
    "system_settings",
    "analytics_records",
];

/// Current row count for one entity, by its table name.
pub async fn count_rows(db: &DatabaseConnection, entity: &str) -> Result<u64, BootstrapError> {
    let count = match entity {
        "users" => user::Entity::find().count(db).await,
        "jobs" => job::Entity::find().count(db).await,
        "applications" => application::Entity::find().count(db).await,
        "testimonials" => testimonial::Entity::find().count(db).await,
        "admin_activity_logs" => admin_activity_log::Entity::find().count(db).await,
        "system_settings" => system_setting::Entity::find().count(db).await,
        "analytics_records" => analytics_record::Entity::find().count(db).await,
        other => {
            return Err(BootstrapError::Reporting(format!("unknown entity {other:?}")));
        }
    };
    count.map_err(|e| BootstrapError::Reporting(format!("count {entity}: {e}")))
}

/// Identity of one administrator account, as shown to the operator.
#[derive(Debug, Clone)]
pub struct AdminSummary {
    pub username: String,
    pub email: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

/// Every account with the admin role, oldest first.
pub async fn list_administrators(
    db: &DatabaseConnection,
) -> Result<Vec<AdminSummary>, BootstrapError> {
    let admins = user::find_admins(db)
        .await
        .map_err(|e| BootstrapError::Reporting(e.to_string()))?;
    Ok(admins
        .into_iter()
        .map(|u| AdminSummary {
            username: u.username,
            email: u.email,
            status: u.status.to_value(),
            created_at: u.created_at,
        })
        .collect())
}

/// Row counts per entity plus the administrator listing.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub counts: Vec<(&'static str, u64)>,
    pub admins: Vec<AdminSummary>,
}

pub async fn collect(db: &DatabaseConnection) -> Result<BootstrapReport, BootstrapError> {
    let mut counts = Vec::with_capacity(ENTITY_NAMES.len());
    for entity in ENTITY_NAMES {
        counts.push((*entity, count_rows(db, entity).await?));
    }
    let admins = list_administrators(db).await?;
    Ok(BootstrapReport { counts, admins })
}

impl fmt::Display for BootstrapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24} {:>8}", "table", "rows")?;
        writeln!(f, "{:<24} {:>8}", "-----", "----")?;
        for (entity, rows) in &self.counts {
            writeln!(f, "{entity:<24} {rows:>8}")?;
        }
        writeln!(f)?;
        writeln!(f, "administrators:")?;
        if self.admins.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for admin in &self.admins {
            writeln!(
                f,
                "  {:<16} {:<32} {:<10} {}",
                admin.username,
                admin.email,
                admin.status,
                admin.created_at.format("%Y-%m-%d %H:%M:%S%z")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn report_renders_counts_and_admins() {
        let report = BootstrapReport {
            counts: vec![("users", 1), ("jobs", 0)],
            admins: vec![AdminSummary {
                username: "admin".into(),
                email: "admin@startwise.com".into(),
                status: "active".into(),
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into(),
            }],
        };
        let rendered = report.to_string();
        assert!(rendered.contains("users"));
        assert!(rendered.contains("admin@startwise.com"));
        assert!(rendered.contains("active"));
    }

    #[test]
    fn report_notes_missing_admins() {
        let report = BootstrapReport { counts: vec![], admins: vec![] };
        assert!(report.to_string().contains("(none)"));
    }
}
