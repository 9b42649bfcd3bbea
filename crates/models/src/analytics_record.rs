use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, NotSet, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Append-only metric sample; there is no update or delete path.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analytics_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub metric_name: String,
    pub metric_value: f64,
    pub metric_kind: MetricKind,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub tags: Option<Json>,
    pub recorded_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MetricKind {
    #[sea_orm(string_value = "counter")]
    Counter,
    #[sea_orm(string_value = "gauge")]
    Gauge,
    #[sea_orm(string_value = "histogram")]
    Histogram,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn record(
    db: &DatabaseConnection,
    metric_name: &str,
    metric_value: f64,
    metric_kind: MetricKind,
    tags: Option<Json>,
) -> Result<Model, ModelError> {
    if metric_name.trim().is_empty() {
        return Err(ModelError::Validation("metric name required".into()));
    }
    let am = ActiveModel {
        id: NotSet,
        metric_name: Set(metric_name.to_string()),
        metric_value: Set(metric_value),
        metric_kind: Set(metric_kind),
        tags: Set(tags),
        recorded_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
