//! CRUD coverage for the entity helpers the surrounding application uses.
use anyhow::Result;
use sea_orm::EntityTrait;

use super::{insert_user, sample_job_fields, setup_test_db};
use crate::analytics_record::{self, MetricKind};
use crate::application::{self, ApplicationStatus, ApplicationType};
use crate::errors::ModelError;
use crate::user::{self, UserRole};
use crate::{job, system_setting, testimonial};

#[tokio::test]
async fn job_create_update_delete() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let employer = insert_user(&db, UserRole::Employer).await?;
    let created = job::create(&db, Some(employer.id), sample_job_fields()).await?;
    assert_eq!(created.title, "Backend Engineer");
    assert_eq!(created.status, job::JobStatus::Active);
    assert_eq!(created.applications_count, 0);

    let mut fields = sample_job_fields();
    fields.title = "Senior Backend Engineer".into();
    fields.salary_max = Some(170_000);
    let updated = job::update(&db, created.id, fields).await?;
    assert_eq!(updated.title, "Senior Backend Engineer");
    assert_eq!(updated.salary_max, Some(170_000));
    assert!(updated.updated_at >= created.updated_at);

    job::delete(&db, created.id).await?;
    assert!(job::Entity::find_by_id(created.id).one(&db).await?.is_none());

    // Deleting again reports the missing row
    let err = job::delete(&db, created.id).await;
    assert!(matches!(err, Err(ModelError::Validation(_))));

    user::Entity::delete_by_id(employer.id).exec(&db).await?;
    Ok(())
}

#[test]
fn job_fields_validation() {
    let mut fields = sample_job_fields();
    fields.title = "  ".into();
    assert!(matches!(job::validate_fields(&fields), Err(ModelError::Validation(_))));

    let mut fields = sample_job_fields();
    fields.company = String::new();
    assert!(job::validate_fields(&fields).is_err());

    let mut fields = sample_job_fields();
    fields.location = String::new();
    assert!(job::validate_fields(&fields).is_err());

    let mut fields = sample_job_fields();
    fields.salary_min = Some(200_000);
    fields.salary_max = Some(100_000);
    assert!(job::validate_fields(&fields).is_err());

    assert!(job::validate_fields(&sample_job_fields()).is_ok());
}

#[tokio::test]
async fn application_snapshot_captured_on_submit() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let employer = insert_user(&db, UserRole::Employer).await?;
    let applicant = insert_user(&db, UserRole::User).await?;
    let posting = job::create(&db, Some(employer.id), sample_job_fields()).await?;

    let app = application::submit(
        &db,
        &posting,
        &applicant,
        ApplicationType::Regular,
        Some("https://cdn.startwise.example/resumes/1.pdf".into()),
        Some("I would like to apply.".into()),
    )
    .await?;

    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.job_id, Some(posting.id));
    assert_eq!(app.job_title, posting.title);
    assert_eq!(app.company_name, posting.company);
    assert_eq!(app.applicant_name, applicant.full_name());
    assert_eq!(app.applicant_email, applicant.email);

    user::Entity::delete_by_id(applicant.id).exec(&db).await?;
    job::delete(&db, posting.id).await?;
    user::Entity::delete_by_id(employer.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn testimonial_create_validates_before_storage() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let author = insert_user(&db, UserRole::User).await?;
    let err = testimonial::create(&db, Some(&author), "Probe", None, None, "Great site", 9).await;
    assert!(matches!(err, Err(ModelError::Validation(_))));

    let ok = testimonial::create(
        &db,
        Some(&author),
        "Jamie",
        Some("Engineer".into()),
        Some("Acme".into()),
        "Found a role within two weeks.",
        5,
    )
    .await?;
    assert_eq!(ok.rating, 5);
    assert_eq!(ok.status, testimonial::TestimonialStatus::Pending);
    assert!(!ok.is_featured);

    testimonial::Entity::delete_by_id(ok.id).exec(&db).await?;
    user::Entity::delete_by_id(author.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn analytics_record_appends() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let row = analytics_record::record(
        &db,
        "jobs.viewed",
        1.0,
        MetricKind::Counter,
        Some(serde_json::json!({"source": "test"})),
    )
    .await?;
    assert_eq!(row.metric_name, "jobs.viewed");
    assert!(row.id > 0);

    let err = analytics_record::record(&db, "  ", 1.0, MetricKind::Gauge, None).await;
    assert!(matches!(err, Err(ModelError::Validation(_))));

    analytics_record::Entity::delete_by_id(row.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn setting_lookup_by_key() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let missing = system_setting::find_by_key(&db, "no_such_key_ever").await?;
    assert!(missing.is_none());
    Ok(())
}
