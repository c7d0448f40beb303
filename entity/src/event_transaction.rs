use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment transaction recorded against an event registration.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub event_id: i32,
    pub user_id: i32,
    pub registration_id: i32,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub currency: String,

    pub payment_method: String,
    /// Identifier returned by the external payment provider.
    pub provider_intent_id: Option<String>,

    /// Transaction state (`pending`, `completed`, `failed`).
    pub status: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
