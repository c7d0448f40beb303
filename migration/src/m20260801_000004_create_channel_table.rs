use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(pk_auto(Channel::Id))
                    .col(string(Channel::Name))
                    .col(text_null(Channel::Description))
                    .col(string_null(Channel::ImageUrl))
                    .col(integer_null(Channel::OrganizationId))
                    .col(integer(Channel::CreatorId))
                    .col(timestamp_with_time_zone(Channel::CreatedAt))
                    .col(timestamp_with_time_zone(Channel::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Channel {
    Table,
    Id,
    Name,
    Description,
    ImageUrl,
    OrganizationId,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}
