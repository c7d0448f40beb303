use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(EventRegistration::Id))
                    .col(integer(EventRegistration::EventId))
                    .col(integer(EventRegistration::UserId))
                    .col(string_uniq(EventRegistration::TicketCode))
                    .col(string(EventRegistration::PaymentStatus))
                    .col(decimal_len_null(EventRegistration::PaymentAmount, 10, 2))
                    .col(timestamp_with_time_zone(EventRegistration::RegisteredAt))
                    .to_owned(),
            )
            .await?;

        // At most one registration per (event, user). Registration inserts
        // treat a violation of this index as "already registered".
        manager
            .create_index(
                Index::create()
                    .name("idx_event_reg_unique")
                    .table(EventRegistration::Table)
                    .col(EventRegistration::EventId)
                    .col(EventRegistration::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_reg_user")
                    .table(EventRegistration::Table)
                    .col(EventRegistration::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventRegistration {
    Table,
    Id,
    EventId,
    UserId,
    TicketCode,
    PaymentStatus,
    PaymentAmount,
    RegisteredAt,
}
