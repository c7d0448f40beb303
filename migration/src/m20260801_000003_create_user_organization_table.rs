use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOrganization::Table)
                    .if_not_exists()
                    .col(pk_auto(UserOrganization::Id))
                    .col(integer(UserOrganization::UserId))
                    .col(integer(UserOrganization::OrganizationId))
                    .col(timestamp_with_time_zone(UserOrganization::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One membership row per (user, organization); the insert path relies
        // on this index to reject duplicates.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_org_unique")
                    .table(UserOrganization::Table)
                    .col(UserOrganization::UserId)
                    .col(UserOrganization::OrganizationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOrganization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserOrganization {
    Table,
    Id,
    UserId,
    OrganizationId,
    CreatedAt,
}
