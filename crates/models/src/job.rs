use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employer_id: Option<Uuid>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub status: JobStatus,
    pub views_count: i32,
    pub applications_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum JobType {
    #[sea_orm(string_value = "full_time")]
    FullTime,
    #[sea_orm(string_value = "part_time")]
    PartTime,
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "internship")]
    Internship,
    #[sea_orm(string_value = "remote")]
    Remote,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum JobStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "paused")]
    Paused,
    #[sea_orm(string_value = "closed")]
    Closed,
    #[sea_orm(string_value = "draft")]
    Draft,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employer => Entity::belongs_to(user::Entity)
                .from(Column::EmployerId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted from the job-editing collaborator for create/update.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: JobType,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
}

/// Server-side mirror of the collaborator's client checks: title, company
/// and location must be non-empty. The description's 100-character minimum
/// stays client-side; storage only requires it to be present.
pub fn validate_fields(fields: &JobFields) -> Result<(), ModelError> {
    if fields.title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    if fields.company.trim().is_empty() {
        return Err(ModelError::Validation("company required".into()));
    }
    if fields.location.trim().is_empty() {
        return Err(ModelError::Validation("location required".into()));
    }
    if fields.description.trim().is_empty() {
        return Err(ModelError::Validation("description required".into()));
    }
    if let (Some(min), Some(max)) = (fields.salary_min, fields.salary_max) {
        if min > max {
            return Err(ModelError::Validation("salary_min exceeds salary_max".into()));
        }
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    employer_id: Option<Uuid>,
    fields: JobFields,
) -> Result<Model, ModelError> {
    validate_fields(&fields)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        employer_id: Set(employer_id),
        title: Set(fields.title),
        company: Set(fields.company),
        location: Set(fields.location),
        description: Set(fields.description),
        job_type: Set(fields.job_type),
        salary_min: Set(fields.salary_min),
        salary_max: Set(fields.salary_max),
        salary_currency: Set(fields.salary_currency),
        requirements: Set(fields.requirements),
        benefits: Set(fields.benefits),
        status: Set(JobStatus::Active),
        views_count: Set(0),
        applications_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: Uuid, fields: JobFields) -> Result<Model, ModelError> {
    validate_fields(&fields)?;
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Validation("job not found".into()))?
        .into();
    am.title = Set(fields.title);
    am.company = Set(fields.company);
    am.location = Set(fields.location);
    am.description = Set(fields.description);
    am.job_type = Set(fields.job_type);
    am.salary_min = Set(fields.salary_min);
    am.salary_max = Set(fields.salary_max);
    am.salary_currency = Set(fields.salary_currency);
    am.requirements = Set(fields.requirements);
    am.benefits = Set(fields.benefits);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Hard delete. Applications pointing at this job keep their rows; the FK
/// policy clears their `job_id`.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ModelError::Validation("job not found".into()));
    }
    Ok(())
}
