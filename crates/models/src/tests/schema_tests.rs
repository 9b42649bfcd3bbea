//! Storage-layer contract tests: deletion propagation and check
//! constraints, exercised against a live database.
use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, EntityTrait, Set, SqlErr, Statement,
};
use uuid::Uuid;

use super::{insert_user, sample_job_fields, setup_test_db};
use crate::application::{self, ApplicationType};
use crate::testimonial::{self, TestimonialStatus};
use crate::user::{self, UserRole};
use crate::{admin_activity_log, job};

/// Deleting the applicant removes their applications (CASCADE).
#[tokio::test]
async fn applicant_delete_cascades_applications() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let employer = insert_user(&db, UserRole::Employer).await?;
    let applicant = insert_user(&db, UserRole::User).await?;
    let posting = job::create(&db, Some(employer.id), sample_job_fields()).await?;
    let app =
        application::submit(&db, &posting, &applicant, ApplicationType::Regular, None, None)
            .await?;

    user::Entity::delete_by_id(applicant.id).exec(&db).await?;

    let remaining = application::Entity::find_by_id(app.id).one(&db).await?;
    assert!(remaining.is_none(), "application should cascade away with its applicant");

    job::delete(&db, posting.id).await?;
    user::Entity::delete_by_id(employer.id).exec(&db).await?;
    Ok(())
}

/// Deleting an employer keeps the job but clears its reference (SET NULL).
#[tokio::test]
async fn employer_delete_nullifies_job_reference() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let employer = insert_user(&db, UserRole::Employer).await?;
    let posting = job::create(&db, Some(employer.id), sample_job_fields()).await?;
    assert_eq!(posting.employer_id, Some(employer.id));

    user::Entity::delete_by_id(employer.id).exec(&db).await?;

    let survivor = job::Entity::find_by_id(posting.id).one(&db).await?.unwrap();
    assert_eq!(survivor.employer_id, None, "job must survive employer deletion");
    assert_eq!(survivor.title, posting.title);

    job::delete(&db, posting.id).await?;
    Ok(())
}

/// Deleting a job preserves applications; only the reference is cleared.
#[tokio::test]
async fn job_delete_nullifies_application_reference() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let employer = insert_user(&db, UserRole::Employer).await?;
    let applicant = insert_user(&db, UserRole::User).await?;
    let posting = job::create(&db, Some(employer.id), sample_job_fields()).await?;
    let app =
        application::submit(&db, &posting, &applicant, ApplicationType::Quick, None, None).await?;

    job::delete(&db, posting.id).await?;

    let survivor = application::Entity::find_by_id(app.id).one(&db).await?.unwrap();
    assert_eq!(survivor.job_id, None);
    // The denormalized snapshot still tells the story
    assert_eq!(survivor.job_title, posting.title);
    assert_eq!(survivor.company_name, posting.company);

    user::Entity::delete_by_id(applicant.id).exec(&db).await?;
    user::Entity::delete_by_id(employer.id).exec(&db).await?;
    Ok(())
}

/// Deleting an admin removes their audit-log entries (CASCADE).
#[tokio::test]
async fn admin_delete_cascades_activity_log() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let admin = insert_user(&db, UserRole::Admin).await?;
    let entry = admin_activity_log::record(
        &db,
        admin.id,
        "user.suspend",
        admin_activity_log::TargetType::User,
        Some(Uuid::new_v4().to_string()),
        Some(serde_json::json!({"reason": "spam"})),
        Some("127.0.0.1".into()),
        None,
    )
    .await?;

    user::Entity::delete_by_id(admin.id).exec(&db).await?;

    let remaining = admin_activity_log::Entity::find_by_id(entry.id).one(&db).await?;
    assert!(remaining.is_none());
    Ok(())
}

fn raw_testimonial(rating: i32) -> testimonial::ActiveModel {
    let now = Utc::now().into();
    testimonial::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(None),
        approved_by: Set(None),
        name: Set("Rating Probe".into()),
        position: Set(None),
        company: Set(None),
        content: Set("The storage layer should have opinions about this.".into()),
        rating: Set(rating),
        status: Set(TestimonialStatus::Pending),
        is_featured: Set(false),
        approved_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// The rating CHECK holds even for writes that bypass model validation.
#[tokio::test]
async fn rating_check_bounds_enforced_by_storage() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    for rating in [0, 6] {
        let err = raw_testimonial(rating).insert(&db).await;
        assert!(err.is_err(), "rating {rating} must be rejected by the CHECK constraint");
    }

    for rating in [1, 5] {
        let row = raw_testimonial(rating).insert(&db).await?;
        assert_eq!(row.rating, rating);
        testimonial::Entity::delete_by_id(row.id).exec(&db).await?;
    }
    Ok(())
}

/// Values outside the declared role set are rejected at the storage layer,
/// even through raw SQL that never touches the Rust enums.
#[tokio::test]
async fn role_enumeration_closed_at_storage_layer() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let marker = Uuid::new_v4().simple().to_string();
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO users (id, username, email, password_hash, first_name, last_name, \
         role, status, is_verified, login_attempts, created_at, updated_at) \
         VALUES ($1, $2, $3, 'x', 'Role', 'Probe', 'superuser', 'active', false, 0, now(), now())",
        [
            Uuid::new_v4().into(),
            format!("role_probe_{marker}").into(),
            format!("role_probe_{marker}@example.com").into(),
        ],
    );
    let result = db.execute(stmt).await;
    assert!(result.is_err(), "unknown role value must violate the CHECK constraint");
    Ok(())
}

/// Duplicate email surfaces as a unique-constraint violation.
#[tokio::test]
async fn duplicate_email_rejected() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let original = insert_user(&db, UserRole::User).await?;
    let now = Utc::now().into();
    let dup = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(format!("dup_{}", Uuid::new_v4().simple())),
        email: Set(original.email.clone()),
        password_hash: Set("x".into()),
        first_name: Set("Dup".into()),
        last_name: Set("User".into()),
        phone: Set(None),
        role: Set(UserRole::User),
        status: Set(crate::user::UserStatus::Active),
        is_verified: Set(false),
        login_attempts: Set(0),
        last_login_at: Set(None),
        last_login_ip: Set(None),
        registration_ip: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let err = dup.insert(&db).await.expect_err("duplicate email must be rejected");
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    user::Entity::delete_by_id(original.id).exec(&db).await?;
    Ok(())
}
