use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefreshToken::Table)
                    .if_not_exists()
                    .col(pk_auto(RefreshToken::Id))
                    .col(integer(RefreshToken::UserId))
                    .col(string_len_uniq(RefreshToken::Token, 500))
                    .col(timestamp_with_time_zone(RefreshToken::ExpiresAt))
                    .col(boolean(RefreshToken::IsRevoked))
                    .col(timestamp_with_time_zone(RefreshToken::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_refresh_user_expires")
                    .table(RefreshToken::Table)
                    .col(RefreshToken::UserId)
                    .col(RefreshToken::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefreshToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RefreshToken {
    Table,
    Id,
    UserId,
    Token,
    ExpiresAt,
    IsRevoked,
    CreatedAt,
}
