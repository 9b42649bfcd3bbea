//! Create `admin_activity_logs` table with FK to `users`.
//!
//! Audit trail of privileged actions; entries are owned by the acting
//! admin and cascade away with the account.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminActivityLogs::Table)
                    .if_not_exists()
                    .col(big_integer(AdminActivityLogs::Id).primary_key().auto_increment())
                    .col(uuid(AdminActivityLogs::AdminId).not_null())
                    .col(string_len(AdminActivityLogs::Action, 128).not_null())
                    .col(
                        string_len(AdminActivityLogs::TargetType, 32)
                            .not_null()
                            .check(Expr::col(AdminActivityLogs::TargetType).is_in([
                                "user",
                                "job",
                                "application",
                                "testimonial",
                                "setting",
                                "system",
                            ])),
                    )
                    .col(ColumnDef::new(AdminActivityLogs::TargetId).string_len(64).null())
                    .col(ColumnDef::new(AdminActivityLogs::Details).json_binary().null())
                    .col(ColumnDef::new(AdminActivityLogs::IpAddress).string_len(64).null())
                    .col(ColumnDef::new(AdminActivityLogs::UserAgent).string_len(255).null())
                    .col(timestamp_with_time_zone(AdminActivityLogs::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_activity_logs_admin")
                            .from(AdminActivityLogs::Table, AdminActivityLogs::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminActivityLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminActivityLogs {
    Table,
    Id,
    AdminId,
    Action,
    TargetType,
    TargetId,
    Details,
    IpAddress,
    UserAgent,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users { Table, Id }
