use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(EventAlert::Id))
                    .col(integer(EventAlert::EventId))
                    .col(string(EventAlert::Title))
                    .col(text(EventAlert::Message))
                    .col(integer(EventAlert::CreatedBy))
                    .col(timestamp_with_time_zone(EventAlert::CreatedAt))
                    .col(timestamp_with_time_zone_null(EventAlert::SentAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_alert_created")
                    .table(EventAlert::Table)
                    .col(EventAlert::EventId)
                    .col(EventAlert::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventAlert {
    Table,
    Id,
    EventId,
    Title,
    Message,
    CreatedBy,
    CreatedAt,
    SentAt,
}
