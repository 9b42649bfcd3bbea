//! Secondary indexes for the access patterns the back office uses:
//! status filtering, foreign-key lookups, and time-ordered listing.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users: filtered by role (admin listing) and status
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_status")
                    .table(Users::Table)
                    .col(Users::Status)
                    .to_owned(),
            )
            .await?;

        // Jobs: employer lookup, status filter, newest-first listing
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_employer")
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_status")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_jobs_created")
                    .table(Jobs::Table)
                    .col(Jobs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Applications: both FK lookups, status filter, applied-at ordering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_job")
                    .table(Applications::Table)
                    .col(Applications::JobId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_user")
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_status")
                    .table(Applications::Table)
                    .col(Applications::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_applied")
                    .table(Applications::Table)
                    .col(Applications::AppliedAt)
                    .to_owned(),
            )
            .await?;

        // Testimonials: moderation queue is filtered by status
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_testimonials_status")
                    .table(Testimonials::Table)
                    .col(Testimonials::Status)
                    .to_owned(),
            )
            .await?;

        // Admin activity: per-admin lookup and time-ordered trail
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_logs_admin")
                    .table(AdminActivityLogs::Table)
                    .col(AdminActivityLogs::AdminId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_logs_created")
                    .table(AdminActivityLogs::Table)
                    .col(AdminActivityLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Analytics: per-metric series scans
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analytics_metric")
                    .table(AnalyticsRecords::Table)
                    .col(AnalyticsRecords::MetricName)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analytics_recorded")
                    .table(AnalyticsRecords::Table)
                    .col(AnalyticsRecords::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_users_role").table(Users::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_status").table(Users::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_employer").table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_status").table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_created").table(Jobs::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_applications_job").table(Applications::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_applications_user").table(Applications::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_applications_status").table(Applications::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_applications_applied")
                    .table(Applications::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_testimonials_status").table(Testimonials::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_admin_logs_admin")
                    .table(AdminActivityLogs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_admin_logs_created")
                    .table(AdminActivityLogs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_analytics_metric")
                    .table(AnalyticsRecords::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_analytics_recorded")
                    .table(AnalyticsRecords::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Role, Status }

#[derive(DeriveIden)]
enum Jobs { Table, EmployerId, Status, CreatedAt }

#[derive(DeriveIden)]
enum Applications { Table, JobId, UserId, Status, AppliedAt }

#[derive(DeriveIden)]
enum Testimonials { Table, Status }

#[derive(DeriveIden)]
enum AdminActivityLogs { Table, AdminId, CreatedAt }

#[derive(DeriveIden)]
enum AnalyticsRecords { Table, MetricName, RecordedAt }
