//! Create `system_settings` table.
//!
//! Key/value configuration with a declared value type tag; `setting_key`
//! is globally unique, which the insert-or-skip seeding relies on.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(uuid(SystemSettings::Id).primary_key())
                    .col(string_len(SystemSettings::SettingKey, 128).unique_key().not_null())
                    .col(text(SystemSettings::SettingValue).not_null())
                    .col(
                        string_len(SystemSettings::ValueType, 16)
                            .not_null()
                            .default("string")
                            .check(
                                Expr::col(SystemSettings::ValueType)
                                    .is_in(["string", "number", "boolean", "json"]),
                            ),
                    )
                    .col(ColumnDef::new(SystemSettings::Description).string_len(255).null())
                    .col(boolean(SystemSettings::IsPublic).not_null().default(false))
                    .col(ColumnDef::new(SystemSettings::UpdatedBy).uuid().null())
                    .col(timestamp_with_time_zone(SystemSettings::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_system_settings_updater")
                            .from(SystemSettings::Table, SystemSettings::UpdatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SystemSettings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SystemSettings {
    Table,
    Id,
    SettingKey,
    SettingValue,
    ValueType,
    Description,
    IsPublic,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users { Table, Id }
