use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub setting_key: String,
    pub setting_value: String,
    pub value_type: SettingType,
    pub description: Option<String>,
    pub is_public: bool,
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTimeWithTimeZone,
}

/// Declared type of a stored setting value. Values are stored as text;
/// the tag tells consumers how to interpret them.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SettingType {
    #[sea_orm(string_value = "string")]
    String,
    #[sea_orm(string_value = "number")]
    Number,
    #[sea_orm(string_value = "boolean")]
    Boolean,
    #[sea_orm(string_value = "json")]
    Json,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Updater,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Updater => Entity::belongs_to(user::Entity)
                .from(Column::UpdatedBy)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::SettingKey.eq(key))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
