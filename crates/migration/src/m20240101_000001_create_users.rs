//! Create `users` table.
//!
//! Account identity, credential hash, role and status enumerations, and
//! login audit fields. Role and status are closed sets enforced by CHECK
//! constraints; username and email are globally unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid(Users::Id).primary_key())
                    .col(string_len(Users::Username, 64).unique_key().not_null())
                    .col(string_len(Users::Email, 255).unique_key().not_null())
                    .col(string_len(Users::PasswordHash, 255).not_null())
                    .col(string_len(Users::FirstName, 128).not_null())
                    .col(string_len(Users::LastName, 128).not_null())
                    .col(ColumnDef::new(Users::Phone).string_len(32).null())
                    .col(
                        string_len(Users::Role, 32)
                            .not_null()
                            .default("user")
                            .check(Expr::col(Users::Role).is_in(["user", "employer", "admin"])),
                    )
                    .col(
                        string_len(Users::Status, 32)
                            .not_null()
                            .default("active")
                            .check(
                                Expr::col(Users::Status)
                                    .is_in(["active", "suspended", "pending", "blocked"]),
                            ),
                    )
                    .col(boolean(Users::IsVerified).not_null().default(false))
                    .col(integer(Users::LoginAttempts).not_null().default(0))
                    .col(ColumnDef::new(Users::LastLoginAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Users::LastLoginIp).string_len(64).null())
                    .col(ColumnDef::new(Users::RegistrationIp).string_len(64).null())
                    .col(timestamp_with_time_zone(Users::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Users::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Phone,
    Role,
    Status,
    IsVerified,
    LoginAttempts,
    LastLoginAt,
    LastLoginIp,
    RegistrationIp,
    CreatedAt,
    UpdatedAt,
}
