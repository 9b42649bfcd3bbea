//! Create `jobs` table with FK to `users` (employer).
//!
//! Deleting the employer nullifies the reference; the posting survives.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(uuid(Jobs::Id).primary_key())
                    .col(ColumnDef::new(Jobs::EmployerId).uuid().null())
                    .col(string_len(Jobs::Title, 255).not_null())
                    .col(string_len(Jobs::Company, 255).not_null())
                    .col(string_len(Jobs::Location, 255).not_null())
                    .col(text(Jobs::Description).not_null())
                    .col(
                        string_len(Jobs::JobType, 32)
                            .not_null()
                            .default("full_time")
                            .check(Expr::col(Jobs::JobType).is_in([
                                "full_time",
                                "part_time",
                                "contract",
                                "internship",
                                "remote",
                            ])),
                    )
                    .col(ColumnDef::new(Jobs::SalaryMin).big_integer().null())
                    .col(ColumnDef::new(Jobs::SalaryMax).big_integer().null())
                    .col(string_len(Jobs::SalaryCurrency, 8).not_null().default("USD"))
                    .col(ColumnDef::new(Jobs::Requirements).text().null())
                    .col(ColumnDef::new(Jobs::Benefits).text().null())
                    .col(
                        string_len(Jobs::Status, 32)
                            .not_null()
                            .default("active")
                            .check(
                                Expr::col(Jobs::Status)
                                    .is_in(["active", "paused", "closed", "draft"]),
                            ),
                    )
                    .col(integer(Jobs::ViewsCount).not_null().default(0))
                    .col(integer(Jobs::ApplicationsCount).not_null().default(0))
                    .col(timestamp_with_time_zone(Jobs::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Jobs::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_employer")
                            .from(Jobs::Table, Jobs::EmployerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Jobs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    EmployerId,
    Title,
    Company,
    Location,
    Description,
    JobType,
    SalaryMin,
    SalaryMax,
    SalaryCurrency,
    Requirements,
    Benefits,
    Status,
    ViewsCount,
    ApplicationsCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users { Table, Id }
