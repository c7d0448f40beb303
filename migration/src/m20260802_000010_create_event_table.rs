use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::ChannelId))
                    .col(string(Event::Name))
                    .col(text_null(Event::Description))
                    .col(timestamp_with_time_zone(Event::EventDate))
                    .col(timestamp_with_time_zone_null(Event::EndDate))
                    .col(string_null(Event::Location))
                    .col(string_null(Event::ImageUrl))
                    .col(integer_null(Event::MaxAttendees))
                    .col(timestamp_with_time_zone_null(Event::RegistrationDeadline))
                    .col(boolean(Event::RequiresPayment))
                    .col(decimal_len_null(Event::Price, 10, 2))
                    .col(string(Event::Currency))
                    .col(timestamp_with_time_zone(Event::CreatedAt))
                    .col(timestamp_with_time_zone(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_channel_date")
                    .table(Event::Table)
                    .col(Event::ChannelId)
                    .col(Event::EventDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ChannelId,
    Name,
    Description,
    EventDate,
    EndDate,
    Location,
    ImageUrl,
    MaxAttendees,
    RegistrationDeadline,
    RequiresPayment,
    Price,
    Currency,
    CreatedAt,
    UpdatedAt,
}
