use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelSubscription::Id))
                    .col(integer(ChannelSubscription::ChannelId))
                    .col(integer(ChannelSubscription::UserId))
                    .col(timestamp_with_time_zone(ChannelSubscription::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_channel_sub_unique")
                    .table(ChannelSubscription::Table)
                    .col(ChannelSubscription::ChannelId)
                    .col(ChannelSubscription::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelSubscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelSubscription {
    Table,
    Id,
    ChannelId,
    UserId,
    CreatedAt,
}
