//! Create `testimonials` table with optional FKs to `users`.
//!
//! The rating CHECK bounds the value to [1,5] at the storage layer,
//! independent of any UI validation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(uuid(Testimonials::Id).primary_key())
                    .col(ColumnDef::new(Testimonials::UserId).uuid().null())
                    .col(ColumnDef::new(Testimonials::ApprovedBy).uuid().null())
                    .col(string_len(Testimonials::Name, 128).not_null())
                    .col(ColumnDef::new(Testimonials::Position).string_len(128).null())
                    .col(ColumnDef::new(Testimonials::Company).string_len(128).null())
                    .col(text(Testimonials::Content).not_null())
                    .col(
                        integer(Testimonials::Rating)
                            .not_null()
                            .check(Expr::col(Testimonials::Rating).between(1, 5)),
                    )
                    .col(
                        string_len(Testimonials::Status, 32)
                            .not_null()
                            .default("pending")
                            .check(
                                Expr::col(Testimonials::Status)
                                    .is_in(["pending", "approved", "rejected"]),
                            ),
                    )
                    .col(boolean(Testimonials::IsFeatured).not_null().default(false))
                    .col(ColumnDef::new(Testimonials::ApprovedAt).timestamp_with_time_zone().null())
                    .col(timestamp_with_time_zone(Testimonials::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Testimonials::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_testimonials_author")
                            .from(Testimonials::Table, Testimonials::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_testimonials_approver")
                            .from(Testimonials::Table, Testimonials::ApprovedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonials::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    UserId,
    ApprovedBy,
    Name,
    Position,
    Company,
    Content,
    Rating,
    Status,
    IsFeatured,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users { Table, Id }
