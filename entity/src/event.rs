use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Calendar event owned by a channel.
///
/// Paid events carry a price/currency; capacity and registration deadline are
/// optional limits checked at registration time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub channel_id: i32,

    pub name: String,
    pub description: Option<String>,

    pub event_date: DateTimeUtc,
    pub end_date: Option<DateTimeUtc>,

    pub location: Option<String>,
    pub image_url: Option<String>,

    pub max_attendees: Option<i32>,
    pub registration_deadline: Option<DateTimeUtc>,

    pub requires_payment: bool,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub currency: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
