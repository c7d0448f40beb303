use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OtpCode::Table)
                    .if_not_exists()
                    .col(pk_auto(OtpCode::Id))
                    .col(string(OtpCode::Email))
                    .col(string(OtpCode::Code))
                    .col(string(OtpCode::Method))
                    .col(string(OtpCode::Purpose))
                    .col(boolean(OtpCode::IsUsed))
                    .col(timestamp_with_time_zone(OtpCode::ExpiresAt))
                    .col(timestamp_with_time_zone(OtpCode::CreatedAt))
                    .col(timestamp_with_time_zone_null(OtpCode::UsedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_otp_email_expires")
                    .table(OtpCode::Table)
                    .col(OtpCode::Email)
                    .col(OtpCode::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OtpCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OtpCode {
    Table,
    Id,
    Email,
    Code,
    Method,
    Purpose,
    IsUsed,
    ExpiresAt,
    CreatedAt,
    UsedAt,
}
