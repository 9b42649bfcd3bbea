use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{job, user};

/// A job application. Carries a denormalized snapshot of the job and
/// applicant at submission time, so the record stays meaningful after the
/// job is deleted (the FK then holds NULL).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub job_id: Option<Uuid>,
    pub user_id: Uuid,
    pub reviewed_by: Option<Uuid>,
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub application_type: ApplicationType,
    pub status: ApplicationStatus,
    pub review_notes: Option<String>,
    pub reviewed_at: Option<DateTimeWithTimeZone>,
    pub applied_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ApplicationType {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "quick")]
    Quick,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "reviewing")]
    Reviewing,
    #[sea_orm(string_value = "shortlisted")]
    Shortlisted,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Job,
    Applicant,
    Reviewer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Job => Entity::belongs_to(job::Entity)
                .from(Column::JobId)
                .to(job::Column::Id)
                .into(),
            Relation::Applicant => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Reviewer => Entity::belongs_to(user::Entity)
                .from(Column::ReviewedBy)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Submit an application, capturing the job/applicant snapshot.
pub async fn submit(
    db: &DatabaseConnection,
    job: &job::Model,
    applicant: &user::Model,
    application_type: ApplicationType,
    resume_url: Option<String>,
    cover_letter: Option<String>,
) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        job_id: Set(Some(job.id)),
        user_id: Set(applicant.id),
        reviewed_by: Set(None),
        job_title: Set(job.title.clone()),
        company_name: Set(job.company.clone()),
        applicant_name: Set(applicant.full_name()),
        applicant_email: Set(applicant.email.clone()),
        resume_url: Set(resume_url),
        cover_letter: Set(cover_letter),
        application_type: Set(application_type),
        status: Set(ApplicationStatus::Pending),
        review_notes: Set(None),
        reviewed_at: Set(None),
        applied_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
