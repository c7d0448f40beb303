//! Channel repository: lookups and the admin check events gate on.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        channel_id: i32,
    ) -> Result<Option<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find_by_id(channel_id)
            .one(self.db)
            .await
    }

    /// Checks whether a user administers a channel.
    ///
    /// A user is an admin when any of the following holds:
    /// - they created the channel,
    /// - they hold an explicit channel-admin grant,
    /// - the channel belongs to an organization they are a member of.
    pub async fn is_user_admin(&self, user_id: i32, channel_id: i32) -> Result<bool, DbErr> {
        let Some(channel) = self.find_by_id(channel_id).await? else {
            return Ok(false);
        };

        if channel.creator_id == user_id {
            return Ok(true);
        }

        let admin_grants = entity::prelude::ChannelAdmin::find()
            .filter(entity::channel_admin::Column::ChannelId.eq(channel_id))
            .filter(entity::channel_admin::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;
        if admin_grants > 0 {
            return Ok(true);
        }

        if let Some(organization_id) = channel.organization_id {
            let memberships = entity::prelude::UserOrganization::find()
                .filter(entity::user_organization::Column::UserId.eq(user_id))
                .filter(entity::user_organization::Column::OrganizationId.eq(organization_id))
                .count(self.db)
                .await?;
            if memberships > 0 {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
