//! Create `applications` table with FKs to `jobs` and `users`.
//!
//! Deleting the applicant cascades; deleting the job or the reviewer only
//! nullifies the reference, so the application record and its denormalized
//! snapshot survive.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(uuid(Applications::Id).primary_key())
                    .col(ColumnDef::new(Applications::JobId).uuid().null())
                    .col(uuid(Applications::UserId).not_null())
                    .col(ColumnDef::new(Applications::ReviewedBy).uuid().null())
                    .col(string_len(Applications::JobTitle, 255).not_null())
                    .col(string_len(Applications::CompanyName, 255).not_null())
                    .col(string_len(Applications::ApplicantName, 255).not_null())
                    .col(string_len(Applications::ApplicantEmail, 255).not_null())
                    .col(ColumnDef::new(Applications::ResumeUrl).string_len(512).null())
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(
                        string_len(Applications::ApplicationType, 32)
                            .not_null()
                            .default("regular")
                            .check(
                                Expr::col(Applications::ApplicationType)
                                    .is_in(["regular", "quick"]),
                            ),
                    )
                    .col(
                        string_len(Applications::Status, 32)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Applications::Status).is_in([
                                "pending",
                                "reviewing",
                                "shortlisted",
                                "accepted",
                                "rejected",
                            ])),
                    )
                    .col(ColumnDef::new(Applications::ReviewNotes).text().null())
                    .col(ColumnDef::new(Applications::ReviewedAt).timestamp_with_time_zone().null())
                    .col(timestamp_with_time_zone(Applications::AppliedAt).not_null())
                    .col(timestamp_with_time_zone(Applications::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job")
                            .from(Applications::Table, Applications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_applicant")
                            .from(Applications::Table, Applications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_reviewer")
                            .from(Applications::Table, Applications::ReviewedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Applications::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    JobId,
    UserId,
    ReviewedBy,
    JobTitle,
    CompanyName,
    ApplicantName,
    ApplicantEmail,
    ResumeUrl,
    CoverLetter,
    ApplicationType,
    Status,
    ReviewNotes,
    ReviewedAt,
    AppliedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Jobs { Table, Id }

#[derive(DeriveIden)]
enum Users { Table, Id }
