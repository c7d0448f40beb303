use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelAdmin::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelAdmin::Id))
                    .col(integer(ChannelAdmin::ChannelId))
                    .col(integer(ChannelAdmin::UserId))
                    .col(timestamp_with_time_zone(ChannelAdmin::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_channel_admin_unique")
                    .table(ChannelAdmin::Table)
                    .col(ChannelAdmin::ChannelId)
                    .col(ChannelAdmin::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelAdmin {
    Table,
    Id,
    ChannelId,
    UserId,
    CreatedAt,
}
