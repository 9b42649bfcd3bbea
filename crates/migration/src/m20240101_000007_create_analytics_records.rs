//! Create `analytics_records` table.
//!
//! Append-only metric samples with dimensional tags; no FK, no
//! update/delete path.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalyticsRecords::Table)
                    .if_not_exists()
                    .col(big_integer(AnalyticsRecords::Id).primary_key().auto_increment())
                    .col(string_len(AnalyticsRecords::MetricName, 128).not_null())
                    .col(double(AnalyticsRecords::MetricValue).not_null())
                    .col(
                        string_len(AnalyticsRecords::MetricKind, 16)
                            .not_null()
                            .default("counter")
                            .check(
                                Expr::col(AnalyticsRecords::MetricKind)
                                    .is_in(["counter", "gauge", "histogram"]),
                            ),
                    )
                    .col(ColumnDef::new(AnalyticsRecords::Tags).json_binary().null())
                    .col(timestamp_with_time_zone(AnalyticsRecords::RecordedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnalyticsRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AnalyticsRecords {
    Table,
    Id,
    MetricName,
    MetricValue,
    MetricKind,
    Tags,
    RecordedAt,
}
