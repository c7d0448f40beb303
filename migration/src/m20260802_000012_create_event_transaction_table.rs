use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(EventTransaction::Id))
                    .col(integer(EventTransaction::EventId))
                    .col(integer(EventTransaction::UserId))
                    .col(integer(EventTransaction::RegistrationId))
                    .col(decimal_len(EventTransaction::Amount, 10, 2))
                    .col(string(EventTransaction::Currency))
                    .col(string(EventTransaction::PaymentMethod))
                    .col(string_null(EventTransaction::ProviderIntentId))
                    .col(string(EventTransaction::Status))
                    .col(timestamp_with_time_zone(EventTransaction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_registration")
                    .table(EventTransaction::Table)
                    .col(EventTransaction::RegistrationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_provider_intent")
                    .table(EventTransaction::Table)
                    .col(EventTransaction::ProviderIntentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTransaction {
    Table,
    Id,
    EventId,
    UserId,
    RegistrationId,
    Amount,
    Currency,
    PaymentMethod,
    ProviderIntentId,
    Status,
    CreatedAt,
}
