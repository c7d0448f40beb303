use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegistrationSession::Table)
                    .if_not_exists()
                    .col(pk_auto(RegistrationSession::Id))
                    .col(string_uniq(RegistrationSession::RegistrationId))
                    .col(string(RegistrationSession::Email))
                    .col(string(RegistrationSession::PasswordHash))
                    .col(string(RegistrationSession::State))
                    .col(timestamp_with_time_zone(RegistrationSession::ExpiresAt))
                    .col(timestamp_with_time_zone(RegistrationSession::CreatedAt))
                    .col(timestamp_with_time_zone_null(
                        RegistrationSession::CompletedAt,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reg_email_expires")
                    .table(RegistrationSession::Table)
                    .col(RegistrationSession::Email)
                    .col(RegistrationSession::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegistrationSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RegistrationSession {
    Table,
    Id,
    RegistrationId,
    Email,
    PasswordHash,
    State,
    ExpiresAt,
    CreatedAt,
    CompletedAt,
}
