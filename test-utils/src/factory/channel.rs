//! Channel factory plus subscription/admin grant helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    creator_id: i32,
    organization_id: Option<i32>,
}

impl<'a> ChannelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        Self {
            db,
            name: format!("Channel {}", next_id()),
            creator_id,
            organization_id: None,
        }
    }

    pub fn organization(mut self, organization_id: i32) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        let now = Utc::now();
        entity::channel::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            organization_id: ActiveValue::Set(self.organization_id),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel owned by `creator_id`.
pub async fn create_channel(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, creator_id).build().await
}

/// Subscribes a user to a channel.
pub async fn subscribe(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::channel_subscription::Model, DbErr> {
    entity::channel_subscription::ActiveModel {
        channel_id: ActiveValue::Set(channel_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Grants a user an explicit channel-admin role.
pub async fn grant_admin(
    db: &DatabaseConnection,
    channel_id: i32,
    user_id: i32,
) -> Result<entity::channel_admin::Model, DbErr> {
    entity::channel_admin::ActiveModel {
        channel_id: ActiveValue::Set(channel_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
