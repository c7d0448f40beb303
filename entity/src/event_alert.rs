use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Announcement sent to an event's attendees.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub event_id: i32,

    pub title: String,
    pub message: String,

    pub created_by: i32,

    pub created_at: DateTimeUtc,
    pub sent_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
