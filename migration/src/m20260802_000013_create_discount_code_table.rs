use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscountCode::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscountCode::Id))
                    .col(integer(DiscountCode::EventId))
                    .col(string(DiscountCode::Code))
                    .col(string(DiscountCode::DiscountType))
                    .col(decimal_len(DiscountCode::DiscountValue, 10, 2))
                    .col(integer_null(DiscountCode::MaxUses))
                    .col(integer(DiscountCode::TimesUsed))
                    .col(timestamp_with_time_zone_null(DiscountCode::ValidUntil))
                    .col(timestamp_with_time_zone(DiscountCode::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discount_event_code")
                    .table(DiscountCode::Table)
                    .col(DiscountCode::EventId)
                    .col(DiscountCode::Code)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscountCode {
    Table,
    Id,
    EventId,
    Code,
    DiscountType,
    DiscountValue,
    MaxUses,
    TimesUsed,
    ValidUntil,
    CreatedAt,
}
