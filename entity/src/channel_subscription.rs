use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Channel subscription; the event feed only shows subscribed channels.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "channel_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub channel_id: i32,
    pub user_id: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
