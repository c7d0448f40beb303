use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Username))
                    .col(string(User::PasswordHash))
                    .col(string(User::Name))
                    .col(string_null(User::Phone))
                    .col(string_null(User::ProfileImageUrl))
                    .col(string(User::Role))
                    .col(boolean(User::IsVerified))
                    .col(boolean(User::IsActive))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    PasswordHash,
    Name,
    Phone,
    ProfileImageUrl,
    Role,
    IsVerified,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
