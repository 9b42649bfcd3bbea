//! Job operations consumed by the external editing form.
//!
//! The collaborator validates client-side that title, company and location
//! are non-empty and the description has at least 100 characters. The
//! non-empty checks are mirrored here (in `models::job::validate_fields`);
//! the length minimum stays client-side.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::errors::ModelError;
use models::job::{self, JobFields};

/// Create a job posting, optionally owned by an employer account.
pub async fn create_job(
    db: &DatabaseConnection,
    employer_id: Option<Uuid>,
    fields: JobFields,
) -> Result<job::Model, ModelError> {
    let created = job::create(db, employer_id, fields).await?;
    Ok(created)
}

/// Replace a posting's editable fields; `updated_at` is touched.
pub async fn update_job(
    db: &DatabaseConnection,
    id: Uuid,
    fields: JobFields,
) -> Result<job::Model, ModelError> {
    let updated = job::update(db, id, fields).await?;
    Ok(updated)
}

/// Remove a posting. Applications referencing it survive with their
/// `job_id` cleared by the FK policy.
pub async fn delete_job(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    job::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::job::JobType;
    use sea_orm::EntityTrait;

    fn fields() -> JobFields {
        JobFields {
            title: "Platform Engineer".into(),
            company: "StartWise".into(),
            location: "Berlin".into(),
            description: "Own the StartWise data platform end to end, including the \
                          bootstrap tooling, schema evolution and seed management."
                .into(),
            job_type: JobType::FullTime,
            salary_min: None,
            salary_max: None,
            salary_currency: "EUR".into(),
            requirements: None,
            benefits: None,
        }
    }

    #[tokio::test]
    async fn collaborator_operations_round_trip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_job(&db, None, fields()).await?;
        assert_eq!(created.employer_id, None);
        assert_eq!(created.location, "Berlin");

        let mut changed = fields();
        changed.location = "Remote".into();
        let updated = update_job(&db, created.id, changed).await?;
        assert_eq!(updated.location, "Remote");

        delete_job(&db, created.id).await?;
        assert!(models::job::Entity::find_by_id(created.id).one(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_required_fields() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let mut bad = fields();
        bad.title = "   ".into();
        let err = create_job(&db, None, bad).await;
        assert!(matches!(err, Err(ModelError::Validation(_))));
        Ok(())
    }
}
