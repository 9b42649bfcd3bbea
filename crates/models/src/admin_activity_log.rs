use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, NotSet, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user;

/// One entry in the privileged-action audit trail. Entries belong to the
/// acting admin and are removed with the account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_activity_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub admin_id: Uuid,
    pub action: String,
    pub target_type: TargetType,
    pub target_id: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub details: Option<Json>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum TargetType {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "job")]
    Job,
    #[sea_orm(string_value = "application")]
    Application,
    #[sea_orm(string_value = "testimonial")]
    Testimonial,
    #[sea_orm(string_value = "setting")]
    Setting,
    #[sea_orm(string_value = "system")]
    System,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Admin,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Admin => Entity::belongs_to(user::Entity)
                .from(Column::AdminId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Append an audit entry.
#[allow(clippy::too_many_arguments)]
pub async fn record(
    db: &DatabaseConnection,
    admin_id: Uuid,
    action: &str,
    target_type: TargetType,
    target_id: Option<String>,
    details: Option<Json>,
    ip_address: Option<String>,
    user_agent: Option<String>,
) -> Result<Model, ModelError> {
    if action.trim().is_empty() {
        return Err(ModelError::Validation("action required".into()));
    }
    let am = ActiveModel {
        id: NotSet,
        admin_id: Set(admin_id),
        action: Set(action.to_string()),
        target_type: Set(target_type),
        target_id: Set(target_id),
        details: Set(details),
        ip_address: Set(ip_address),
        user_agent: Set(user_agent),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
