use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub approved_by: Option<Uuid>,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: i32,
    pub status: TestimonialStatus,
    pub is_featured: bool,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum TestimonialStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
    Approver,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Author => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Approver => Entity::belongs_to(user::Entity)
                .from(Column::ApprovedBy)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create a pending testimonial. The rating bound is also enforced by a
/// CHECK constraint, so writes bypassing this helper cannot evade it.
pub async fn create(
    db: &DatabaseConnection,
    author: Option<&user::Model>,
    name: &str,
    position: Option<String>,
    company: Option<String>,
    content: &str,
    rating: i32,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if content.trim().is_empty() {
        return Err(ModelError::Validation("content required".into()));
    }
    if !(1..=5).contains(&rating) {
        return Err(ModelError::Validation("rating must be between 1 and 5".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(author.map(|u| u.id)),
        approved_by: Set(None),
        name: Set(name.to_string()),
        position: Set(position),
        company: Set(company),
        content: Set(content.to_string()),
        rating: Set(rating),
        status: Set(TestimonialStatus::Pending),
        is_featured: Set(false),
        approved_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
